use async_std::task::sleep;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use futures::join;
use std::time::Duration;

use crate::components::chart::{load_echarts_runtime, PriceChart};
use crate::components::coins::CoinRow;
use crate::components::controls::{MetricToggle, SelectDays};
use crate::components::guard::use_session_guard;
use crate::components::info::Info;
use crate::components::loader::Loader;
use crate::components::toast::{show_toast_message, ErrorToast};
use crate::utils::api::ApiError;
use crate::utils::coindata::{CoinData, CoinSummary, PriceMetric};
use crate::utils::fetcher::{MarketApi, RequestSeq, DEBOUNCE_MS};
use crate::utils::series::{build_single_series, ChartSeries};

const DEFAULT_DAYS: u32 = 30;

async fn load_history(
  api: MarketApi,
  id: String,
  name: String,
  days: u32,
  metric: PriceMetric,
  mut chart: Signal<ChartSeries>,
) {
  match api.price_history(&id, days, metric).await {
    Ok(points) => {
      chart.set(build_single_series(&name, &points));
    }
    Err(err) => {
      warn!("history fetch failed for {id}: {err}");
      show_toast_message("coin-error", &err.user_message());
    }
  }
}

#[component]
pub fn Coin(id: String) -> Element {
  static CSS: Asset = asset!("assets/coin.css");

  let session = use_session_guard();
  let api = use_context::<MarketApi>();
  let mut detail = use_signal(|| None::<CoinData>);
  let chart = use_signal(ChartSeries::empty);
  let mut error = use_signal(|| None::<ApiError>);
  let mut loading = use_signal(|| true);

  let days = use_signal(|| DEFAULT_DAYS);
  let metric = use_signal(|| PriceMetric::Prices);
  let chart_seq = use_hook(RequestSeq::new);

  {
    let api = api.clone();
    let id = id.clone();
    use_future(move || {
      let api = api.clone();
      let id = id.clone();
      async move {
        let (detail_res, history_res) =
          join!(api.coin_data(&id), api.price_history(&id, DEFAULT_DAYS, PriceMetric::Prices));
        match detail_res {
          Ok(data) => {
            if let Ok(points) = &history_res {
              let mut chart = chart;
              chart.set(build_single_series(&data.name, points));
            }
            detail.set(Some(data));
          }
          Err(err) => {
            warn!("coin fetch failed for {id}: {err}");
            error.set(Some(err));
          }
        }
        loading.set(false);
      }
    });
  }

  // Day/metric flips refetch after the debounce window; only the latest
  // ticket is allowed to overwrite the chart.
  {
    let api = api.clone();
    let page_id = id.clone();
    use_effect(move || {
      let wanted_days = days();
      let wanted_metric = metric();
      let Some(name) = detail().map(|d| d.name) else {
        return;
      };
      let ticket = chart_seq.issue();
      let seq = chart_seq.clone();
      let api = api.clone();
      let coin_id = page_id.clone();
      spawn(async move {
        sleep(Duration::from_millis(DEBOUNCE_MS)).await;
        if seq.is_current(ticket) {
          load_history(api, coin_id, name, wanted_days, wanted_metric, chart).await;
        }
      });
    });
  }

  if session().is_none() {
    return rsx! {
      document::Stylesheet {href: CSS},
      div {
        class: "fetch-failed",
        p { "Sign in to view coin details." }
      }
    };
  }

  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "coin-page",
      onmounted: move |_evt| load_echarts_runtime(),
      ErrorToast { id: "coin-error", content: "Could not load chart data." },
      if loading() {
        Loader { }
      } else if let Some(err) = error() {
        div {
          class: "fetch-failed",
          if matches!(err, ApiError::NotFound(_)) {
            h2 { "Coin not found" }
            p { "There is no coin with id \"{id}\"." }
          } else {
            h2 { "Something went wrong" }
            p { "{err.user_message()}" }
          }
        }
      } else if let Some(data) = detail() {
        table {
          class: "coin-table coin-table-single",
          tbody {
            CoinRow { coin: CoinSummary::from(&data) }
          }
        }
        div {
          class: "chart-controls",
          SelectDays { days }
          MetricToggle { metric }
        }
        PriceChart { series: chart, canvas_id: "coin-chart" }
        Info { title: data.name.clone(), description: data.desc.clone() }
      }
    }
  }
}
