//! tests/end_to_end.rs
//!
//! Full pipeline runs against an in-memory sink.

use cli_timeplot::plot::binning::target_width;
use cli_timeplot::{AnsiSink, PaddedBounds, PlotConfig, Role, TimePlot};

fn memory_plot(rows: usize, cols: usize) -> TimePlot<AnsiSink<Vec<u8>>> {
    TimePlot::with_sink(PlotConfig::new(rows, cols), AnsiSink::new(Vec::new()))
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // CSI: ESC [ params final-byte
            for n in chars.by_ref() {
                if n.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[test]
fn three_points_on_smallest_grid() {
    let mut plot = memory_plot(10, 20);
    plot.add_point(0.0, 0.0);
    plot.add_point(1.0, 10.0);
    plot.add_point(2.0, 0.0);
    plot.show().unwrap();

    let raw = String::from_utf8(plot.sink().get_ref().clone()).unwrap();
    let plain = strip_ansi(&raw);
    let lines: Vec<&str> = plain.lines().collect();
    assert_eq!(lines.len(), 10);
    assert!(lines.iter().all(|l| l.chars().count() == 20));

    // top row printed first; bottom row is the x label
    assert_eq!(lines[9].trim(), "Time (seconds)");
    assert!(lines[0].contains('H'));
    assert!(raw.contains("\x1b[38;5;2mH\x1b[0m"));

    let grid = plot.compose();
    let tallest = (2..grid.cols())
        .map(|c| {
            (2..grid.rows())
                .filter(|&r| grid.get(c, r).and_then(|cell| cell.role) == Some(Role::Bar))
                .count()
        })
        .max()
        .unwrap_or(0);
    assert_eq!(tallest, 8);
}

#[test]
fn redraw_rewinds_to_previous_frame() {
    let mut plot = memory_plot(12, 30);
    for i in 0..5 {
        plot.add_point(i as f64, (i * i) as f64);
        plot.show().unwrap();
    }
    let raw = String::from_utf8(plot.sink().get_ref().clone()).unwrap();
    assert_eq!(raw.matches("\x1b[12A").count(), 4);
    assert_eq!(raw.matches("\x1b[0G\x1b[12A").count(), 4);
    assert!(!raw.starts_with("\x1b[0G"));
    assert!(!raw.contains("\x1b[1G"));
}

#[test]
fn bucket_count_follows_sample_count() {
    let mut plot = memory_plot(10, 20);
    assert_eq!(plot.binning().buckets.len(), 1);
    for i in 0..40 {
        plot.add_point(i as f64, (i % 7) as f64);
        let b = plot.binning();
        assert_eq!(b.buckets.len(), target_width(18, i + 1));
        assert_eq!(b.buckets.len(), 18usize.min(i + 2));
        assert!(b.buckets.iter().enumerate().all(|(k, bucket)| bucket.index == k));
    }
}

#[test]
fn single_sample_and_flat_series_render() {
    let mut plot = memory_plot(10, 20);
    plot.add_point(5.0, 5.0);
    plot.show().unwrap();

    plot.add_point(5.0, 5.0);
    plot.add_point(5.0, 5.0);
    let grid = plot.compose();
    assert_eq!(grid.column_text(2)[2..].trim_end(), "HHHH");
    plot.show().unwrap();
}

#[test]
fn empty_plot_still_draws_axes() {
    let mut plot = memory_plot(10, 20);
    plot.set_y_label("load");
    plot.show().unwrap();
    let grid = plot.compose();
    assert_eq!(grid.rows(), 10);
    assert_eq!(grid.column_text(0)[1..].trim(), "load");
    assert!(grid.row_text(1).contains('0'));
}

#[test]
fn label_fitting_through_plot() {
    let mut plot = memory_plot(10, 20);
    plot.set_x_label("hi");
    assert_eq!(plot.config().x_label(), format!("{:^20}", "hi"));
    plot.set_x_label("0123456789abcdefghijkl");
    assert_eq!(plot.config().x_label(), "0123456789abcdefghij");
}

#[test]
fn out_of_range_configuration_uses_defaults() {
    let plot = memory_plot(5, 5000);
    assert_eq!(plot.config().rows(), 30);
    assert_eq!(plot.config().cols(), 100);
    assert_eq!(plot.compose().cols(), 100);
}

#[test]
fn padded_bounds_keep_bars_below_the_top() {
    let mut plot = memory_plot(10, 20).with_bounds(PaddedBounds::default());
    for i in 0..30 {
        plot.add_point(i as f64 + 1.0, 10.0 + (i % 5) as f64);
    }
    let b = plot.binning();
    assert_eq!(b.buckets.len(), 18);
    assert!(b.points.iter().all(|p| p.y_cell < b.height() as f64));
    plot.show().unwrap();
}

#[test]
fn negative_values_get_signed_ticks() {
    let mut plot = memory_plot(30, 100);
    plot.add_point(0.0, -2500.0);
    plot.add_point(1.0, 2500.0);
    let grid = plot.compose();
    let y_axis = grid.column_text(1);
    assert!(y_axis[1..].starts_with("-3K"));
}

#[test]
fn next_point_is_monotonic_without_show() {
    let mut plot = memory_plot(10, 20);
    for i in 0..500 {
        plot.next_point(i as f64);
    }
    let xs: Vec<f64> = plot.samples().iter().map(|s| s.x).collect();
    assert_eq!(xs[0], 0.0);
    assert!(xs.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn print_data_bypasses_grid() {
    let mut plot = memory_plot(10, 20);
    plot.add_point(0.5, 7.0);
    plot.print_data().unwrap();
    let raw = String::from_utf8(plot.into_sink().into_inner()).unwrap();
    assert_eq!(raw, " Y   X \n7, 0.5\n");
}
