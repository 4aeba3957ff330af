use futures_concurrency::future::Race;
use sbustap::{
    serial::LINK_RATE,
    client::{*, units::sbus_to_percent},
    };

/// usage: monitor [LINK_PORT]
#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    let port = std::env::args().nth(1).unwrap_or("/dev/ttyACM0".into());
    println!("connecting to {}", port);
    let controller = Controller::open(&port, LINK_RATE).unwrap();

    let task = async {
        println!("device says {:?}", controller.connect().await.unwrap());
        let mut reports = controller.reports();
        loop {
            match reports.recv().await {
                Ok(Report::Channels(data)) => {
                    let percents: Vec<String> = data.output_channels.iter()
                        .map(|&value| format!("{:+4.0}", sbus_to_percent(value)))
                        .collect();
                    println!("{}  overrides {:?}{}{}",
                        percents.join(" "),
                        data.overrides,
                        if data.frame_lost {"  lost"} else {""},
                        if data.failsafe {"  FAILSAFE"} else {""},
                        );
                },
                Ok(Report::Status(status)) => println!("link connected: {}", status.connected),
                Ok(Report::OverrideExpired {channel, ..}) => println!("override of channel {} expired", channel),
                Ok(_) => {},
                Err(error) => println!("{}", error),
            }
        }
    };
    let run = async {
        controller.run().await.unwrap();
    };
    (task, run).race().await;
}
