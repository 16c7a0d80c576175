use chrono::DateTime;

use super::coindata::PricePoint;

/// Spans longer than this get calendar-date labels; shorter spans keep the
/// time of day so intraday points stay distinguishable.
const DATE_ONLY_SPAN_MS: i64 = 2 * 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesAxis {
  Primary,
  Secondary,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLine {
  pub label: String,
  pub values: Vec<Option<f64>>,
  pub axis: SeriesAxis,
}

/// Chart-ready shape: one shared label axis plus one or two value series.
/// Every series holds exactly `labels.len()` values; gaps are `None`, never
/// zero, so the renderer breaks the line instead of implying a real price.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
  pub labels: Vec<String>,
  pub series: Vec<SeriesLine>,
}

impl ChartSeries {
  pub fn empty() -> Self {
    ChartSeries { labels: vec![], series: vec![] }
  }

  pub fn is_empty(&self) -> bool {
    self.labels.is_empty()
  }
}

fn clean(value: f64) -> Option<f64> {
  value.is_finite().then_some(value)
}

fn span_ms(points: &[PricePoint]) -> i64 {
  match (points.first(), points.last()) {
    (Some(first), Some(last)) => last.timestamp_ms - first.timestamp_ms,
    _ => 0,
  }
}

fn point_label(timestamp_ms: i64, date_only: bool) -> String {
  let Some(dt) = DateTime::from_timestamp_millis(timestamp_ms) else {
    return String::new();
  };
  if date_only {
    dt.format("%d %b %Y").to_string()
  } else {
    dt.format("%d %b %H:%M").to_string()
  }
}

/// Builds the single-asset chart shape. An empty input yields the empty
/// series so the chart widget can show its "no data" state.
pub fn build_single_series(name: &str, points: &[PricePoint]) -> ChartSeries {
  if points.is_empty() {
    return ChartSeries::empty();
  }
  let date_only = span_ms(points) > DATE_ONLY_SPAN_MS;
  ChartSeries {
    labels: points.iter().map(|p| point_label(p.timestamp_ms, date_only)).collect(),
    series: vec![SeriesLine {
      label: name.to_string(),
      values: points.iter().map(|p| clean(p.value)).collect(),
      axis: SeriesAxis::Primary,
    }],
  }
}

/// Builds the dual-axis comparison shape from two independently fetched
/// histories.
///
/// Alignment is by index, not by timestamp: both queries are issued with the
/// same `days` window so the Nth samples land close enough together. This is
/// a known limitation — offset or unevenly sampled histories are not
/// reconciled or interpolated. The label axis comes from the first series
/// and is extended from the second where that one is longer; the shorter
/// value vector is padded with trailing gaps so both series keep the axis
/// length.
pub fn build_comparison_series(
  a_name: &str,
  a_points: &[PricePoint],
  b_name: &str,
  b_points: &[PricePoint],
) -> ChartSeries {
  if a_points.is_empty() && b_points.is_empty() {
    return ChartSeries::empty();
  }

  let len = a_points.len().max(b_points.len());
  let date_only =
    span_ms(a_points).max(span_ms(b_points)) > DATE_ONLY_SPAN_MS;

  let mut labels = Vec::with_capacity(len);
  for i in 0..len {
    let ts = a_points
      .get(i)
      .or_else(|| b_points.get(i))
      .map(|p| p.timestamp_ms)
      .unwrap_or(0);
    labels.push(point_label(ts, date_only));
  }

  let padded = |points: &[PricePoint], axis: SeriesAxis, name: &str| SeriesLine {
    label: name.to_string(),
    values: (0..len)
      .map(|i| points.get(i).and_then(|p| clean(p.value)))
      .collect(),
    axis,
  };

  ChartSeries {
    labels,
    series: vec![
      padded(a_points, SeriesAxis::Primary, a_name),
      padded(b_points, SeriesAxis::Secondary, b_name),
    ],
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const HOUR_MS: i64 = 60 * 60 * 1000;
  const DAY_MS: i64 = 24 * HOUR_MS;

  fn points(start_ms: i64, step_ms: i64, values: &[f64]) -> Vec<PricePoint> {
    values
      .iter()
      .enumerate()
      .map(|(i, &v)| PricePoint { timestamp_ms: start_ms + step_ms * i as i64, value: v })
      .collect()
  }

  #[test]
  fn single_series_shape_and_idempotence() {
    let pts = points(1_700_000_000_000, HOUR_MS, &[1.0, 2.0, 3.0]);
    let first = build_single_series("Bitcoin", &pts);
    let second = build_single_series("Bitcoin", &pts);

    assert_eq!(first, second);
    assert_eq!(first.labels.len(), 3);
    assert_eq!(first.series.len(), 1);
    assert_eq!(first.series[0].values, vec![Some(1.0), Some(2.0), Some(3.0)]);
    assert_eq!(first.series[0].axis, SeriesAxis::Primary);
  }

  #[test]
  fn non_finite_values_become_gaps_not_zero() {
    let pts = points(1_700_000_000_000, HOUR_MS, &[1.0, f64::NAN, f64::INFINITY, 4.0]);
    let chart = build_single_series("X", &pts);
    assert_eq!(chart.series[0].values, vec![Some(1.0), None, None, Some(4.0)]);
    assert_eq!(chart.labels.len(), chart.series[0].values.len());
  }

  #[test]
  fn empty_input_yields_empty_series() {
    assert!(build_single_series("X", &[]).is_empty());
    assert!(build_comparison_series("A", &[], "B", &[]).is_empty());
  }

  #[test]
  fn label_granularity_follows_span() {
    // 6 hours of data keeps the time of day
    let short = build_single_series("X", &points(1_700_000_000_000, HOUR_MS, &[1.0; 6]));
    assert!(short.labels[0].contains(':'), "short span label was {:?}", short.labels[0]);

    // 30 days of data collapses to calendar dates
    let long = build_single_series("X", &points(1_700_000_000_000, DAY_MS, &[1.0; 30]));
    assert!(!long.labels[0].contains(':'), "long span label was {:?}", long.labels[0]);
  }

  #[test]
  fn comparison_pads_shorter_series_with_trailing_gaps() {
    let a = points(1_700_000_000_000, DAY_MS, &[1.0; 30]);
    let b = points(1_700_000_000_000, DAY_MS, &[2.0; 28]);
    let chart = build_comparison_series("A", &a, "B", &b);

    assert_eq!(chart.labels.len(), 30);
    assert_eq!(chart.series[0].values.len(), 30);
    assert_eq!(chart.series[1].values.len(), 30);
    assert_eq!(chart.series[1].values[27], Some(2.0));
    assert_eq!(chart.series[1].values[28], None);
    assert_eq!(chart.series[1].values[29], None);
    assert_eq!(chart.series[0].axis, SeriesAxis::Primary);
    assert_eq!(chart.series[1].axis, SeriesAxis::Secondary);
  }

  #[test]
  fn comparison_extends_labels_from_longer_second_series() {
    let a = points(1_700_000_000_000, DAY_MS, &[1.0; 3]);
    let b = points(1_700_000_000_000, DAY_MS, &[2.0; 5]);
    let chart = build_comparison_series("A", &a, "B", &b);

    assert_eq!(chart.labels.len(), 5);
    assert!(chart.labels.iter().all(|l| !l.is_empty()));
    assert_eq!(chart.series[0].values[3], None);
    assert_eq!(chart.series[1].values[4], Some(2.0));
  }
}
