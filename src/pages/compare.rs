use async_std::task::sleep;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use futures::join;
use std::time::Duration;

use crate::components::chart::{load_echarts_runtime, PriceChart};
use crate::components::coins::CoinRow;
use crate::components::controls::{CoinSelect, MetricToggle, SelectDays};
use crate::components::guard::use_session_guard;
use crate::components::info::Info;
use crate::components::loader::Loader;
use crate::components::toast::{show_toast_message, ErrorToast};
use crate::utils::coindata::{CoinData, CoinSummary, PriceMetric};
use crate::utils::fetcher::{GeckoOrder, MarketApi, RequestSeq, DEBOUNCE_MS};
use crate::utils::series::{build_comparison_series, ChartSeries};

const DEFAULT_FIRST: &str = "bitcoin";
const DEFAULT_SECOND: &str = "ethereum";
const DEFAULT_DAYS: u32 = 30;

// Both coins load together; one failure fails the pair so the page never
// shows half a comparison.
async fn load_pair(
  api: MarketApi,
  first_id: String,
  second_id: String,
  days: u32,
  metric: PriceMetric,
  mut first: Signal<Option<CoinData>>,
  mut second: Signal<Option<CoinData>>,
  mut chart: Signal<ChartSeries>,
  mut loading: Signal<bool>,
) {
  loading.set(true);
  let (first_res, second_res, first_hist, second_hist) = join!(
    api.coin_data(&first_id),
    api.coin_data(&second_id),
    api.price_history(&first_id, days, metric),
    api.price_history(&second_id, days, metric),
  );

  let outcome = first_res.and_then(|a| {
    second_res.map(|b| (a, b))
  });
  match outcome {
    Ok((a, b)) => {
      if let (Ok(pa), Ok(pb)) = (&first_hist, &second_hist) {
        chart.set(build_comparison_series(&a.name, pa, &b.name, pb));
      } else {
        chart.set(ChartSeries::empty());
      }
      first.set(Some(a));
      second.set(Some(b));
    }
    Err(err) => {
      warn!("comparison fetch failed ({first_id} vs {second_id}): {err}");
      show_toast_message("compare-error", &err.user_message());
    }
  }
  loading.set(false);
}

#[component]
pub fn Compare() -> Element {
  static CSS: Asset = asset!("assets/compare.css");

  let session = use_session_guard();
  let api = use_context::<MarketApi>();
  let mut all_coins = use_signal(Vec::<CoinSummary>::new);
  let first = use_signal(|| None::<CoinData>);
  let second = use_signal(|| None::<CoinData>);
  let chart = use_signal(ChartSeries::empty);
  let loading = use_signal(|| true);

  let first_id = use_signal(|| DEFAULT_FIRST.to_string());
  let second_id = use_signal(|| DEFAULT_SECOND.to_string());
  let days = use_signal(|| DEFAULT_DAYS);
  let metric = use_signal(|| PriceMetric::Prices);
  let pair_seq = use_hook(RequestSeq::new);

  {
    let api = api.clone();
    use_future(move || {
      let api = api.clone();
      async move {
        match api.coin_markets(1, 100, GeckoOrder::MarketCapDesc).await {
          Ok(list) => all_coins.set(list),
          Err(err) => warn!("coin list for selects failed: {err}"),
        }
      }
    });
  }

  // Any knob change (coin, range, metric) reloads the pair after the quiet
  // window, latest ticket only.
  {
    let api = api.clone();
    use_effect(move || {
      let a = first_id();
      let b = second_id();
      let wanted_days = days();
      let wanted_metric = metric();
      let ticket = pair_seq.issue();
      let seq = pair_seq.clone();
      let api = api.clone();
      spawn(async move {
        sleep(Duration::from_millis(DEBOUNCE_MS)).await;
        if seq.is_current(ticket) {
          load_pair(api, a, b, wanted_days, wanted_metric, first, second, chart, loading).await;
        }
      });
    });
  }

  if session().is_none() {
    return rsx! {
      document::Stylesheet {href: CSS},
      div {
        class: "fetch-failed",
        p { "Sign in to compare coins." }
      }
    };
  }

  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "compare-page",
      onmounted: move |_evt| load_echarts_runtime(),
      ErrorToast { id: "compare-error", content: "Could not load comparison data." },
      div {
        class: "compare-controls",
        CoinSelect { label: "Crypto 1", coins: all_coins(), selected: first_id }
        CoinSelect { label: "Crypto 2", coins: all_coins(), selected: second_id }
        SelectDays { days }
        MetricToggle { metric }
      }
      if loading() && first().is_none() {
        Loader { }
      } else if let (Some(a), Some(b)) = (first(), second()) {
        table {
          class: "coin-table",
          tbody {
            CoinRow { coin: CoinSummary::from(&a) }
            CoinRow { coin: CoinSummary::from(&b) }
          }
        }
        PriceChart { series: chart, canvas_id: "compare-chart" }
        Info { title: a.name.clone(), description: a.desc.clone() }
        Info { title: b.name.clone(), description: b.desc.clone() }
      }
    }
  }
}
