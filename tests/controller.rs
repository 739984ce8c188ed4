//! Driving a cluster from another thread through the controller.

use std::thread;
use std::time::Duration;

use clap::Parser;
use cluster_common::{Cluster, Popup};
use ev_cluster::{Cli, channel};

fn revealed_cluster(args: &[&str]) -> Cluster {
    let options = Cli::parse_from(std::iter::once("ev-cluster").chain(args.iter().copied()))
        .into_options()
        .expect("valid options");
    Cluster::new(options.settings)
}

#[test]
fn test_commands_from_another_thread() {
    let (controller, queue) = channel();
    let mut cluster = revealed_cluster(&[]);

    let worker = thread::spawn(move || {
        controller.set_auto_reset(false)?;
        controller.set_speed(120)?;
        controller.update_battery(35)?;
        controller.charging_on()
    });
    worker.join().expect("worker thread").expect("cluster listening");

    assert_eq!(queue.drain_into(&mut cluster), 4);
    assert_eq!(cluster.gauge().speed_kmh(), 120);
    assert_eq!(cluster.gauge().battery(), 35);
    assert!(cluster.lamps().charging);
    assert!(matches!(cluster.popup(), Some(Popup::AutoReset { enabled: false, .. })));
}

#[test]
fn test_range_change_shows_popup() {
    let (controller, queue) = channel();
    let mut cluster = revealed_cluster(&["--top-speed", "160"]);
    assert_eq!(cluster.range().top(), 160);

    controller.set_speedometer_range(240).unwrap();
    queue.drain_into(&mut cluster);
    assert_eq!(cluster.range().top(), 240);
    assert!(matches!(cluster.popup(), Some(Popup::Range { top: 240, .. })));

    cluster.advance(Duration::from_secs(2));
    assert_eq!(cluster.popup(), None, "Popup should expire");
}

#[test]
fn test_indicators_blink_after_toggle() {
    let (controller, queue) = channel();
    let mut cluster = revealed_cluster(&[]);

    controller.toggle_left_indicator().unwrap();
    queue.drain_into(&mut cluster);
    assert!(!cluster.lamps().left_indicator, "Indicator waits one interval before lighting");

    cluster.advance(Duration::from_millis(600));
    assert!(cluster.lamps().left_indicator, "Indicator lights after one interval");
    assert!(!cluster.lamps().right_indicator);

    controller.toggle_left_indicator().unwrap();
    queue.drain_into(&mut cluster);
    cluster.advance(Duration::from_millis(1200));
    assert!(!cluster.lamps().left_indicator, "Switched-off indicator stays dark");
}

#[test]
fn test_starting_values_from_flags() {
    let cluster = revealed_cluster(&["--battery", "20", "--charging"]);
    assert_eq!(cluster.gauge().battery(), 20);
    assert!(cluster.lamps().charging);
    assert!(!cluster.is_starting_up());
}
