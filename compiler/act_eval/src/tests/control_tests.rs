//! Flow-control semantics: loops, break/continue walks, if/elif/else
//! chains.

use super::{compile, run_output};
use crate::BufferSurface;
use pretty_assertions::assert_eq;

#[test]
fn loop_false_executes_body_zero_times() {
    let output = run_output("main(){ loop(false){ print(\"body\") } print(\"end\") }");
    assert_eq!(output, vec!["end"]);
}

#[test]
fn doloop_false_executes_body_exactly_once() {
    let output = run_output("main(){ doloop(false){ print(\"body\") } print(\"end\") }");
    assert_eq!(output, vec!["body", "end"]);
}

#[test]
fn break_exits_the_enclosing_loop_through_an_if() {
    let output = run_output(
        "main(){ loop(true){ if(true){ break() } print(\"x\") } print(\"done\") }",
    );
    assert_eq!(output, vec!["done"]);
}

#[test]
fn break_in_inner_loop_leaves_the_outer_loop_running() {
    let output = run_output(
        "main(){
            store(again,bool(true))
            loop(again){
                store(again,bool(false))
                doloop(false){ break() print(\"inner\") }
                print(\"after\")
            }
            print(\"end\")
        }",
    );
    assert_eq!(output, vec!["after", "end"]);
}

#[test]
fn continue_aborts_the_rest_of_the_iteration() {
    let output = run_output("main(){ doloop(false){ continue() print(\"never\") } print(\"end\") }");
    assert_eq!(output, vec!["end"]);
}

#[test]
fn continue_guard_never_reaches_later_siblings() {
    // With i out of range the body never runs at all; with any in-range i
    // the leading continue() still keeps `never` unreachable.
    let output = run_output(
        "main(){
            store(i,int(5))
            loop(compare(i,lesser,3)){ continue() print(\"never\") }
            print(\"end\")
        }",
    );
    assert_eq!(output, vec!["end"]);
}

#[test]
fn top_level_break_ends_the_script() {
    let output = run_output("main(){ print(\"a\") break() print(\"b\") }");
    assert_eq!(output, vec!["a"]);
}

#[test]
fn chain_executes_only_the_first_satisfied_arm() {
    let output = run_output(
        "main(){
            if(false){ print(\"A\") }
            elif(false){ print(\"B\") }
            elif(true){ print(\"C\") }
            else{ print(\"D\") }
        }",
    );
    assert_eq!(output, vec!["C"]);
}

#[test]
fn chain_skips_later_true_arms_once_satisfied() {
    let output = run_output(
        "main(){
            if(true){ print(\"A\") }
            elif(true){ print(\"B\") }
            else{ print(\"D\") }
        }",
    );
    assert_eq!(output, vec!["A"]);
}

#[test]
fn else_runs_when_no_arm_fired() {
    let output = run_output(
        "main(){ if(false){ print(\"A\") } else{ print(\"D\") } }",
    );
    assert_eq!(output, vec!["D"]);
}

#[test]
fn chains_re_arm_on_every_loop_iteration() {
    let output = run_output(
        "main(){
            store(again,bool(true))
            store(first,bool(true))
            doloop(again){
                if(first){ print(\"first\") }
                else{ print(\"second\") }
                store(again,first)
                store(first,bool(false))
            }
        }",
    );
    assert_eq!(output, vec!["first", "second"]);
}

#[test]
fn loop_terminates_when_condition_turns_false() {
    let output = run_output(
        "main(){
            store(go,bool(true))
            loop(go){ print(\"tick\") store(go,bool(false)) }
            print(\"end\")
        }",
    );
    assert_eq!(output, vec!["tick", "end"]);
}

#[test]
fn one_script_runs_many_times_with_fresh_variables() {
    // The tag tree is reused across runs; the variable store is not. The
    // store inside the never-taken branch defines the symbol at parse time
    // only, so `counter` reads as its default on every run -- including the
    // second run, which must not see the store from the first.
    let script = compile(
        "main(){
            if(false){ store(counter,int(9)) }
            print(counter)
            store(counter,int(1))
        }",
    );
    for _ in 0..2 {
        let mut surface = BufferSurface::new();
        script.run(&mut surface).unwrap();
        assert_eq!(surface.output(), vec!["0"]);
    }
}
