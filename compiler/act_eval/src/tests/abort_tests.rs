//! Host-raised aborts must unwind through every nested frame.

use std::time::Duration;

use super::compile;
use crate::{ActionSurface, Interrupt};
use pretty_assertions::assert_eq;

/// Emits successfully a fixed number of times, then aborts.
struct EmitLimit {
    remaining: usize,
    output: Vec<String>,
}

impl EmitLimit {
    fn new(remaining: usize) -> Self {
        EmitLimit {
            remaining,
            output: Vec::new(),
        }
    }
}

impl ActionSurface for EmitLimit {
    fn suspend(&mut self, _duration: Duration) -> Result<(), Interrupt> {
        Ok(())
    }

    fn emit(&mut self, text: &str) -> Result<(), Interrupt> {
        if self.remaining == 0 {
            return Err(Interrupt::new("emit limit reached"));
        }
        self.remaining -= 1;
        self.output.push(text.to_string());
        Ok(())
    }
}

/// Never emits or suspends; aborts via `poll` after a fixed number of
/// statement boundaries.
struct PollLimit {
    remaining: usize,
}

impl ActionSurface for PollLimit {
    fn suspend(&mut self, _duration: Duration) -> Result<(), Interrupt> {
        Ok(())
    }

    fn emit(&mut self, _text: &str) -> Result<(), Interrupt> {
        Ok(())
    }

    fn poll(&mut self) -> Result<(), Interrupt> {
        if self.remaining == 0 {
            return Err(Interrupt::new("host shutdown"));
        }
        self.remaining -= 1;
        Ok(())
    }
}

#[test]
fn abort_stops_an_unbounded_loop() {
    let script = compile("main(){ loop(true){ print(\"tick\") } }");
    let mut surface = EmitLimit::new(3);
    let result = script.run(&mut surface);
    assert_eq!(
        result,
        Err(Interrupt::new("emit limit reached")),
        "abort must surface as the run result"
    );
    assert_eq!(surface.output, vec!["tick", "tick", "tick"]);
}

#[test]
fn abort_skips_all_remaining_siblings_in_nested_frames() {
    let script = compile(
        "main(){
            doloop(false){
                if(true){ print(\"a\") print(\"b\") }
                print(\"c\")
            }
            print(\"d\")
        }",
    );
    let mut surface = EmitLimit::new(1);
    assert!(script.run(&mut surface).is_err());
    assert_eq!(surface.output, vec!["a"]);
}

#[test]
fn poll_aborts_a_loop_with_an_empty_body() {
    let script = compile("main(){ loop(true){ } }");
    let mut surface = PollLimit { remaining: 10 };
    let result = script.run(&mut surface);
    assert_eq!(result, Err(Interrupt::new("host shutdown")));
}

#[test]
fn abort_during_wait_unwinds() {
    struct FailingSleep;
    impl ActionSurface for FailingSleep {
        fn suspend(&mut self, _duration: Duration) -> Result<(), Interrupt> {
            Err(Interrupt::new("sleep cancelled"))
        }
        fn emit(&mut self, _text: &str) -> Result<(), Interrupt> {
            Ok(())
        }
    }

    let script = compile("main(){ wait(1,SECOND) print(\"after\") }");
    let mut surface = FailingSleep;
    assert_eq!(
        script.run(&mut surface),
        Err(Interrupt::new("sleep cancelled"))
    );
}
