use std::{thread, time::Duration};

use nec_pd_rust::PDSession;

fn main() {
    let mut session = PDSession::new_from_tcp("10.0.0.240", 7142).expect("Failed to connect to display");

    session.set_power_on().expect("Failed to set power ON");

    println!("Powered on");

    thread::sleep(Duration::from_secs(10));

    session.set_power_off().expect("Failed to set power off");

    println!("Powered off");
}
