use std::{thread, time::Duration};

use auth_core::TokenService;
use fleet::{AccessDenied, Drone, DroneProxy};
use secrecy::Secret;

// Walks through the whole flow: request a short-lived token, fly while it is
// valid, then watch the proxy refuse the next command once it has expired.
fn main() {
    let operator = "Egor1";
    let service = TokenService::new(Secret::new("myKEY-111".to_string()));

    let token = service
        .issue(operator, Duration::from_secs(5))
        .expect("operator id is not empty");
    println!("[Token Service] issued token for {}:", operator);
    println!("{}", token);

    let mut proxy = DroneProxy::new(Drone::new(), service, token);

    match proxy.take_off() {
        Ok(event) => println!("[Proxy] {:?}", event),
        Err(denied) => println!("[Proxy] take off refused: {}", denied),
    }

    println!("[Demo] waiting past the token's validity window...");
    thread::sleep(Duration::from_secs(7));

    match proxy.land() {
        Ok(event) => println!("[Proxy] {:?}", event),
        Err(AccessDenied::Expired) => {
            println!("[Proxy] landing refused: token expired, request a fresh one")
        }
        Err(denied) => println!("[Proxy] landing refused: {}", denied),
    }
}
