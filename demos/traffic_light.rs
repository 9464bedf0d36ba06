//! Traffic light walkthrough.
//!
//! Prints the shortest path to every reachable light state, the number of
//! simple paths, a replayed event sequence, and the declared structure of
//! the light's description.
//!
//! Run with `RUST_LOG=mindset_graph=trace` to watch the traversal.

use mindset_graph::core::{Reducer, TransitionRejected};
use mindset_graph::event_enum;
use mindset_graph::graph::{to_directed_graph, Machine, StateNodeConfig};
use mindset_graph::traversal::{
    path_from_events, traverse_shortest_paths, traverse_simple_paths, TraversalOptions,
};
use serde::Serialize;

event_enum! {
    enum LightEvent {
        Timer,
        PowerOutage,
        PedCountdown,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
enum Light {
    Green,
    Yellow,
    Walk,
    Wait,
    Stop,
    Flashing,
}

fn init_logging(level: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn light() -> Reducer<Light, LightEvent> {
    use Light::*;

    Reducer::partial(Green, |s: &Light, e: &LightEvent| match (s, e) {
        (Green, LightEvent::Timer) => Ok(Yellow),
        (Yellow, LightEvent::Timer) => Ok(Walk),
        (Walk | Wait | Stop | Flashing, LightEvent::Timer) => Ok(Green),
        (_, LightEvent::PowerOutage) => Ok(Flashing),
        (Walk, LightEvent::PedCountdown) => Ok(Wait),
        (Wait, LightEvent::PedCountdown) => Ok(Stop),
        (s, e) => {
            let reason = format!("{e:?} is not handled in {s:?}");
            Err(TransitionRejected::new(reason))
        }
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging("info");

    let system = light();
    let options = TraversalOptions::builder()
        .events(vec![
            LightEvent::Timer,
            LightEvent::PowerOutage,
            LightEvent::PedCountdown,
        ])
        .build();

    println!("Shortest paths:");
    for (key, plan) in traverse_shortest_paths(&system, &options)?.iter() {
        if let Some(path) = plan.shortest() {
            println!("  {key:<12} {:?}", path.events());
        }
    }

    let simple = traverse_simple_paths(&system, &options)?;
    println!("\nSimple paths: {}", simple.paths().count());

    let replayed = path_from_events(
        &system,
        &[
            LightEvent::Timer,
            LightEvent::Timer,
            LightEvent::Timer,
            LightEvent::PowerOutage,
        ],
    )?;
    println!(
        "\nReplay ends at {:?} after {} steps",
        replayed.state,
        replayed.weight()
    );

    let machine = Machine::new(
        StateNodeConfig::compound("light", "green")
            .state(StateNodeConfig::atomic("green").on("TIMER", "yellow"))
            .state(StateNodeConfig::atomic("yellow").on("TIMER", "red"))
            .state(
                StateNodeConfig::compound("red", "walk")
                    .on("TIMER", "green")
                    .on("POWER_OUTAGE", ".flashing")
                    .state(StateNodeConfig::atomic("walk").on("PED_COUNTDOWN", "wait"))
                    .state(StateNodeConfig::atomic("wait").on("PED_COUNTDOWN", "stop"))
                    .state(StateNodeConfig::atomic("stop"))
                    .state(StateNodeConfig::atomic("flashing")),
            ),
    )?;
    let graph = to_directed_graph(&machine);
    let json = serde_json::to_string_pretty(&graph)?;
    println!("\nDirected graph:\n{json}");

    Ok(())
}
