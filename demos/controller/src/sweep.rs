use std::time::Duration;
use futures_concurrency::future::Race;
use sbustap::{
    serial::LINK_RATE,
    client::{*, units::micros_to_sbus},
    };

/// usage: sweep [LINK_PORT] [CHANNEL]
#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    let mut args = std::env::args().skip(1);
    let port = args.next().unwrap_or("/dev/ttyACM0".into());
    let channel = args.next().map(|arg| arg.parse().unwrap()).unwrap_or(1);
    let controller = Controller::open(&port, LINK_RATE).unwrap();

    let task = async {
        controller.connect().await.unwrap();
        println!("commands: {:?}", controller.help().await.unwrap());

        // overrides must be refreshed before they expire
        for micros in (1000 ..= 2000).step_by(20).chain((1000 ..= 2000).rev().step_by(20)) {
            controller.set_channel(channel, micros_to_sbus(micros)).await.unwrap();
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        println!("{:?}", controller.override_status().await.unwrap());
        controller.clear_all().await.unwrap();
    };
    let run = async {
        controller.run().await.unwrap();
    };
    (task, run).race().await;
}
