#![allow(non_snake_case)]

use charming::{
  component::{Axis, Grid, Legend},
  datatype::{CompositeValue, DataPoint, NumericValue},
  element::{AxisLabel, AxisType, Color, LineStyle, SplitLine, TextStyle, Tooltip, Trigger},
  series::Line,
  Chart, WasmRenderer,
};
use dioxus::prelude::*;

use crate::utils::series::{ChartSeries, SeriesAxis};

const LINE_COLORS: [&str; 2] = ["#3a80e9", "#61c96f"];

// ECharts renders a gap for non-numeric entries, which is exactly what a
// missing sample should look like.
fn to_data_points(values: &[Option<f64>]) -> Vec<DataPoint> {
  values
    .iter()
    .map(|v| match v {
      Some(n) => DataPoint::Value(CompositeValue::Number(NumericValue::Float(*n))),
      None => DataPoint::Value(CompositeValue::String("-".to_string())),
    })
    .collect()
}

/// Renders a `ChartSeries` into an ECharts line chart. With two series the
/// secondary one gets its own y scale so assets of different magnitude stay
/// visually comparable.
#[component]
pub fn PriceChart(series: ReadOnlySignal<ChartSeries>, canvas_id: String) -> Element {
  let renderer = use_signal(|| WasmRenderer::new(760, 420));
  let target_id = canvas_id.clone();

  use_effect(move || {
    let data = series();
    if data.is_empty() {
      return;
    }

    let multi_axis = data.series.len() > 1;

    let mut chart = Chart::new()
      .background_color("rgba(0,0,0,0)")
      .color(LINE_COLORS.iter().map(|c| Color::Value(c.to_string())).collect::<Vec<_>>())
      .tooltip(
        Tooltip::new()
        .trigger(Trigger::Axis)
      )
      .grid(
        Grid::new()
        .left("8%")
        .right(if multi_axis { "8%" } else { "4%" })
        .contain_label(true)
      )
      .x_axis(
        Axis::new()
        .type_(AxisType::Category)
        .data(data.labels.clone())
        .axis_label(
          AxisLabel::new()
          .color("#94a3b8")
        )
      )
      .y_axis(
        Axis::new()
        .type_(AxisType::Value)
        .scale(true)
        .split_line(
          SplitLine::new()
          .line_style(
            LineStyle::new()
            .color("#334155")
          )
        )
        .axis_label(
          AxisLabel::new()
          .color("#94a3b8")
        )
      );

    if multi_axis {
      // independent right-hand scale for the compared asset
      chart = chart
        .legend(
          Legend::new()
          .text_style(
            TextStyle::new()
            .color("#94a3b8")
          )
        )
        .y_axis(
          Axis::new()
          .type_(AxisType::Value)
          .scale(true)
          .split_line(SplitLine::new().show(false))
          .axis_label(
            AxisLabel::new()
            .color("#94a3b8")
          )
        );
    }

    for line in &data.series {
      let mut plot = Line::new()
        .name(line.label.clone())
        .show_symbol(false)
        .smooth(0.4)
        .data(to_data_points(&line.values));
      if line.axis == SeriesAxis::Secondary {
        plot = plot.y_axis_index(1);
      }
      chart = chart.series(plot);
    }

    renderer
      .read_unchecked()
      .render(&target_id, &chart)
      .expect("failed to render price chart!");
  });

  rsx! {
    if series().is_empty() {
      div {
        class: "chart-empty",
        p { "No chart data available." }
      }
    } else {
      div {
        id: "{canvas_id}",
        class: "price-chart",
        onmounted: move |_evt| {
          document::eval(
            r#"
            var millis = 350;
            setTimeout(function() {
                const element = document.getElementsByClassName('price-chart')[0];
                if (!element) {console.log('no chart element found');}
                var chart = echarts.getInstanceByDom(element);
                if (!chart) {console.log('no chart instance found');}
                window.addEventListener('resize', function() {
                    chart.resize();
                });
            }, millis)
            "#);
        }
      }
    }
  }
}

/// Loads the ECharts runtime the wasm renderer binds to. Pages with a chart
/// call this from their root `onmounted`.
pub fn load_echarts_runtime() {
  document::eval(
    r#"
    if (!window.echarts) {
      const scriptElem = document.createElement('script');
      scriptElem.src = 'https://cdn.jsdelivr.net/npm/echarts@5.6.0/dist/echarts.min.js';
      scriptElem.async = true;
      scriptElem.onerror = function() { console.error('Error loading echarts runtime'); };
      document.head.appendChild(scriptElem);
    }
    "#,
  );
}
