#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::utils::coindata::{CoinSummary, PriceMetric};

pub const DAY_CHOICES: [u32; 6] = [7, 30, 60, 90, 120, 365];

/// Day-range picker for the history chart.
#[component]
pub fn SelectDays(days: Signal<u32>) -> Element {
  rsx! {
    div {
      class: "select-days",
      span { class: "control-label", "Days" }
      for choice in DAY_CHOICES {
        button {
          key: "days-{choice}",
          class: if days() == choice { "pill pill-active" } else { "pill" },
          onclick: move |_evt| days.set(choice),
          "{choice}d"
        }
      }
    }
  }
}

/// Switches the charted metric between prices, market caps and volumes.
#[component]
pub fn MetricToggle(metric: Signal<PriceMetric>) -> Element {
  let choices = [PriceMetric::Prices, PriceMetric::MarketCaps, PriceMetric::TotalVolumes];

  rsx! {
    div {
      class: "metric-toggle",
      for choice in choices {
        button {
          key: "metric-{choice}",
          class: if metric() == choice { "pill pill-active" } else { "pill" },
          onclick: move |_evt| metric.set(choice),
          "{choice.label()}"
        }
      }
    }
  }
}

/// Coin dropdown for the compare page. `selected` holds a CoinGecko id.
#[component]
pub fn CoinSelect(label: String, coins: Vec<CoinSummary>, selected: Signal<String>) -> Element {
  rsx! {
    div {
      class: "coin-select",
      label { class: "control-label", "{label}" }
      select {
        value: "{selected}",
        onchange: move |evt| selected.set(evt.value()),
        for coin in coins.iter() {
          option {
            key: "opt-{coin.id}",
            value: "{coin.id}",
            selected: coin.id == selected(),
            "{coin.name}"
          }
        }
      }
    }
  }
}
