use nec_pd_rust::{PDSession, proto::{Frame, MessageType}};

fn main() {
    let mut session = PDSession::new_from_tcp("10.0.0.240", 7142).expect("Failed to connect to display");

    // Backlight to 80%, built by hand
    let frame = Frame::new(MessageType::SetParameter, b"0010", 80);

    session.send_frame(frame).expect("Failed to send frame");

    let reply = session.recv_reply().expect("Failed to read reply");
    println!("Response: {reply:02x?}");

    println!("Done")
}
