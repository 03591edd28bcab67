use std::{thread, time::Duration};

use nec_pd_rust::PDSession;

fn main() {
    let mut session = PDSession::new_from_tcp("10.0.0.240", 7142).expect("Failed to connect to display");

    for percent in (0..=100).step_by(10) {
        session.set_backlight(percent).expect("Failed to set backlight");

        println!("Backlight {percent}%");

        thread::sleep(Duration::from_millis(500));
    }
}
