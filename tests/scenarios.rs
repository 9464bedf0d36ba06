//! End-to-end scenarios over small, well-known transition systems.

use mindset_graph::core::{
    Event, EventMap, JsonSerializer, Reducer, SerializeError, SerializedState, StateSerializer,
    TransitionRejected,
};
use mindset_graph::event_enum;
use mindset_graph::graph::{to_directed_graph, Machine, StateNodeConfig};
use mindset_graph::traversal::{
    adjacency_map, path_from_events, traverse_shortest_paths, traverse_simple_paths,
    TraversalError, TraversalOptions,
};
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

event_enum! {
    enum LightEvent {
        Timer,
        PowerOutage,
        PedCountdown,
        PushButton,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
enum Ped {
    Walk,
    Wait,
    Stop,
    Flashing,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
enum Light {
    Green,
    Yellow,
    Red(Ped),
}

fn light() -> Reducer<Light, LightEvent> {
    Reducer::partial(Light::Green, |s: &Light, e: &LightEvent| match (s, e) {
        (Light::Green, LightEvent::Timer) => Ok(Light::Yellow),
        (Light::Yellow, LightEvent::Timer) => Ok(Light::Red(Ped::Walk)),
        (Light::Red(_), LightEvent::Timer) => Ok(Light::Green),
        (_, LightEvent::PowerOutage) => Ok(Light::Red(Ped::Flashing)),
        (Light::Red(Ped::Walk), LightEvent::PedCountdown) => Ok(Light::Red(Ped::Wait)),
        (Light::Red(Ped::Wait), LightEvent::PedCountdown) => Ok(Light::Red(Ped::Stop)),
        (Light::Green, LightEvent::PushButton) => Ok(Light::Green),
        (s, e) => {
            let reason = format!("{e:?} is not handled in {s:?}");
            Err(TransitionRejected::new(reason))
        }
    })
}

fn light_options() -> TraversalOptions<Light, LightEvent> {
    TraversalOptions::builder()
        .events(vec![
            LightEvent::Timer,
            LightEvent::PowerOutage,
            LightEvent::PedCountdown,
            LightEvent::PushButton,
        ])
        .build()
}

#[test]
fn counter_reaches_finish_through_simple_paths() {
    event_enum! {
        enum CounterEvent { Inc }
    }

    #[derive(Clone, Debug, PartialEq, Serialize)]
    struct Counter {
        value: &'static str,
        count: u32,
    }

    let system = Reducer::partial(
        Counter {
            value: "start",
            count: 0,
        },
        |s: &Counter, _: &CounterEvent| {
            if s.value == "finish" {
                return Err(TransitionRejected::new("finish is final"));
            }
            let count = s.count + 1;
            let value = if count == 3 { "finish" } else { "start" };
            Ok(Counter { value, count })
        },
    );
    let options = TraversalOptions::builder()
        .serializer(|s: &Counter, _: Option<&CounterEvent>| {
            format!("{:?}|count:{}", s.value, s.count)
        })
        .events(|_: &Counter| vec![CounterEvent::Inc])
        .build();

    let paths = traverse_simple_paths(&system, &options).unwrap();

    let summary: Vec<_> = paths
        .iter()
        .map(|(key, plan)| {
            let weight = plan.paths[0].weight();
            (key.to_string(), plan.paths.len(), weight)
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            (r#""start"|count:0"#.to_string(), 1, 0),
            (r#""start"|count:1"#.to_string(), 1, 1),
            (r#""start"|count:2"#.to_string(), 1, 2),
            (r#""finish"|count:3"#.to_string(), 1, 3),
        ]
    );
}

#[test]
fn equivalent_events_give_distinct_paths_to_one_key() {
    event_enum! {
        enum Swap { Foo, Bar }
    }

    let system = Reducer::new("a", |s: &&'static str, _: &Swap| {
        if *s == "a" {
            "b"
        } else {
            "a"
        }
    });
    let options = TraversalOptions::builder()
        .events(vec![Swap::Foo, Swap::Bar])
        .build();

    let paths = traverse_simple_paths(&system, &options).unwrap();
    let to_b = paths.get(r#""b""#).unwrap();

    assert_eq!(to_b.paths.len(), 2);
    let events: Vec<_> = to_b
        .paths
        .iter()
        .map(|path| {
            assert_eq!(path.weight(), 1);
            path.steps[0].event.event_type().to_string()
        })
        .collect();
    assert_eq!(events, vec!["Foo", "Bar"]);
}

#[test]
fn replay_ends_in_flashing() {
    let path = path_from_events(
        &light(),
        &[
            LightEvent::Timer,
            LightEvent::Timer,
            LightEvent::Timer,
            LightEvent::PowerOutage,
        ],
    )
    .unwrap();

    assert_eq!(path.weight(), 4);
    assert_eq!(
        path.states(),
        vec![
            &Light::Yellow,
            &Light::Red(Ped::Walk),
            &Light::Green,
            &Light::Red(Ped::Flashing),
        ]
    );
    assert_eq!(path.state, Light::Red(Ped::Flashing));
}

#[test]
fn replay_rejects_unhandled_event() {
    let events = [LightEvent::Timer, LightEvent::PushButton];
    let err = path_from_events(&light(), &events).unwrap_err();

    match err {
        TraversalError::InvalidReplayEvent {
            index, event_type, ..
        } => {
            assert_eq!(index, 1);
            assert_eq!(event_type, "PushButton");
        }
        other => panic!("Expected InvalidReplayEvent, got {other:?}"),
    }
}

#[test]
fn filter_bounds_unbounded_counter() {
    event_enum! {
        enum Count { Inc }
    }

    let system = Reducer::new(0u32, |n: &u32, _: &Count| n + 1);
    let options = TraversalOptions::builder()
        .events(vec![Count::Inc])
        .filter(|n: &u32| *n < 5)
        .build();

    let shortest = traverse_shortest_paths(&system, &options).unwrap();
    let simple = traverse_simple_paths(&system, &options).unwrap();
    let expected = vec!["0", "1", "2", "3", "4"];

    assert_eq!(shortest.keys().collect::<Vec<_>>(), expected);
    assert_eq!(simple.keys().collect::<Vec<_>>(), expected);
}

#[test]
fn filter_rejected_states_are_never_expanded() {
    event_enum! {
        enum Grow { Inc, Double }
    }

    let expanded = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&expanded);
    let system = Reducer::new(0u32, move |n: &u32, e: &Grow| {
        if *n >= 5 {
            counter.fetch_add(1, Ordering::SeqCst);
        }
        match e {
            Grow::Inc => n + 1,
            Grow::Double => n * 2,
        }
    });
    let options = TraversalOptions::builder()
        .events(vec![Grow::Inc, Grow::Double])
        .filter(|n: &u32| *n < 5)
        .build();

    assert_eq!(adjacency_map(&system, &options).unwrap().len(), 5);
    assert_eq!(traverse_shortest_paths(&system, &options).unwrap().len(), 5);
    assert_eq!(traverse_simple_paths(&system, &options).unwrap().len(), 5);
    assert_eq!(expanded.load(Ordering::SeqCst), 0);
}

#[test]
fn serializer_errors_stop_the_traversal() {
    event_enum! {
        enum Count { Inc }
    }

    struct UpToThree;

    impl StateSerializer<u32, Count> for UpToThree {
        fn serialize(&self, n: &u32, _: Option<&Count>) -> Result<SerializedState, SerializeError> {
            if *n > 3 {
                return Err(SerializeError::Custom(format!("no key for {n}")));
            }
            Ok(n.to_string())
        }
    }

    let system = Reducer::new(0u32, |n: &u32, _: &Count| n + 1);
    let options = TraversalOptions::builder()
        .events(vec![Count::Inc])
        .serializer(UpToThree)
        .build();

    for err in [
        adjacency_map(&system, &options).unwrap_err(),
        traverse_shortest_paths(&system, &options).unwrap_err(),
        traverse_simple_paths(&system, &options).unwrap_err(),
    ] {
        assert!(matches!(
            err,
            TraversalError::Serialize(SerializeError::Custom(_))
        ));
    }
}

#[test]
fn shortest_paths_cover_light() {
    let paths = traverse_shortest_paths(&light(), &light_options()).unwrap();

    assert_eq!(paths.len(), 6);
    let flashing = paths.get(r#"{"Red":"Flashing"}"#).unwrap();
    assert_eq!(flashing.paths.len(), 1);
    assert_eq!(flashing.paths[0].events(), vec![&LightEvent::PowerOutage]);

    let stop = paths.get(r#"{"Red":"Stop"}"#).unwrap();
    assert_eq!(
        stop.paths[0].events(),
        vec![
            &LightEvent::Timer,
            &LightEvent::Timer,
            &LightEvent::PedCountdown,
            &LightEvent::PedCountdown,
        ]
    );
}

#[test]
fn simple_paths_never_repeat_a_state() {
    let paths = traverse_simple_paths(&light(), &light_options()).unwrap();

    assert_eq!(paths.len(), 6);
    for path in paths.paths() {
        let mut seen = vec![Light::Green];
        for state in path.states() {
            assert!(!seen.contains(state), "{state:?} repeated in {path:?}");
            seen.push(*state);
        }
    }
    assert!(paths.get(r#"{"Red":"Flashing"}"#).unwrap().paths.len() > 1);
}

#[test]
fn adjacency_lists_handled_events_only() {
    let adjacency = adjacency_map(&light(), &light_options()).unwrap();

    assert_eq!(adjacency.len(), 6);
    let green = adjacency.get(r#""Green""#).unwrap();
    let events: Vec<_> = green.transitions().map(|(event, _)| event).collect();
    assert_eq!(
        events,
        vec![r#""Timer""#, r#""PowerOutage""#, r#""PushButton""#]
    );
    assert_eq!(
        green.transition(r#""PushButton""#).unwrap().state,
        Light::Green
    );
}

#[test]
fn traversals_are_deterministic() {
    let first = traverse_simple_paths(&light(), &light_options()).unwrap();
    let second = traverse_simple_paths(&light(), &light_options()).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn event_tagged_keys_separate_arrivals() {
    let options = TraversalOptions::builder()
        .serializer(JsonSerializer::with_event_type())
        .events(vec![LightEvent::Timer, LightEvent::PowerOutage])
        .build();

    let paths = traverse_shortest_paths(&light(), &options).unwrap();

    assert!(paths.contains_key(r#""Green" | """#));
    assert!(paths.contains_key(r#""Green" | "Timer""#));
    assert!(paths.contains_key(r#"{"Red":"Flashing"} | "PowerOutage""#));
}

#[test]
fn generated_events_reflect_current_state() {
    #[derive(Clone, Debug, PartialEq, Serialize)]
    struct Add(u32);

    impl Event for Add {
        fn event_type(&self) -> &str {
            "ADD"
        }
    }

    let system = Reducer::new(1u32, |n: &u32, e: &Add| n + e.0);
    let add_self = |n: &u32| vec![Add(*n)];
    let options = TraversalOptions::builder()
        .events(EventMap::new().with_generator("ADD", add_self))
        .filter(|n: &u32| *n <= 16)
        .build();

    let paths = traverse_shortest_paths(&system, &options).unwrap();

    assert_eq!(
        paths.keys().collect::<Vec<_>>(),
        vec!["1", "2", "4", "8", "16"]
    );
    let path = &paths.get("16").unwrap().paths[0];
    assert_eq!(path.events(), vec![&Add(1), &Add(2), &Add(4), &Add(8)]);
}

#[test]
fn limit_reports_unbounded_exploration() {
    let system = Reducer::new(0u64, |n: &u64, _: &LightEvent| n + 1);
    let options = TraversalOptions::builder()
        .events(vec![LightEvent::Timer])
        .limit(100)
        .build();

    let err = traverse_shortest_paths(&system, &options).unwrap_err();
    assert!(err.is_unbounded());
}

#[test]
fn light_description_projects_declared_structure() {
    let machine = Machine::new(
        StateNodeConfig::compound("light", "green")
            .state(
                StateNodeConfig::atomic("green")
                    .on("TIMER", "yellow")
                    .on("POWER_OUTAGE", "red.flashing")
                    .on_self("PUSH_BUTTON"),
            )
            .state(
                StateNodeConfig::atomic("yellow")
                    .on("TIMER", "red")
                    .on("POWER_OUTAGE", "#light.red.flashing"),
            )
            .state(
                StateNodeConfig::compound("red", "walk")
                    .on("TIMER", "green")
                    .on("POWER_OUTAGE", ".flashing")
                    .state(StateNodeConfig::atomic("walk").on("PED_COUNTDOWN", "wait"))
                    .state(StateNodeConfig::atomic("wait").on("PED_COUNTDOWN", "stop"))
                    .state(StateNodeConfig::final_state("stop"))
                    .state(StateNodeConfig::atomic("flashing")),
            ),
    )
    .unwrap();

    let graph = to_directed_graph(&machine);

    assert_eq!(graph.node_count(), 8);
    let green_targets: Vec<_> = graph.children[0]
        .edges
        .iter()
        .map(|edge| edge.target.as_str())
        .collect();
    assert_eq!(
        green_targets,
        vec!["light.yellow", "light.red.flashing", "light.green"]
    );
    assert_eq!(graph.to_petgraph().edge_count(), 9);
}
