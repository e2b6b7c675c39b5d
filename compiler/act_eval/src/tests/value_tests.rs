//! Value evaluation: combinators, comparisons, conversions, wait timing,
//! print representations.

use std::time::Duration;

use super::{compile, run_output};
use crate::BufferSurface;
use pretty_assertions::assert_eq;

#[test]
fn and_with_zero_operands_is_true() {
    let output = run_output("main(){ print(and()) }");
    assert_eq!(output, vec!["true"]);
}

#[test]
fn and_is_false_once_any_operand_is_false() {
    let output = run_output("main(){ print(and(true,false,true)) print(and(true,true)) }");
    assert_eq!(output, vec!["false", "true"]);
}

#[test]
fn or_is_the_dual_of_and() {
    let output = run_output("main(){ print(or()) print(or(false,true)) print(or(false,false)) }");
    assert_eq!(output, vec!["false", "true", "false"]);
}

#[test]
fn not_negates_its_operand() {
    let output = run_output("main(){ print(not(false)) print(not(and())) }");
    assert_eq!(output, vec!["true", "false"]);
}

#[test]
fn compare_with_zero_operands_is_vacuously_true() {
    let output = run_output("main(){ print(compare()) }");
    assert_eq!(output, vec!["true"]);
}

#[test]
fn compare_folds_adjacent_pairs() {
    let output = run_output(
        "main(){
            print(compare(int(3),greater,2,1))
            print(compare(int(1),lesser,3,2))
            print(compare(int(2),equal,2,2))
            print(compare(int(2),notequal,2))
        }",
    );
    assert_eq!(output, vec!["true", "false", "true", "false"]);
}

#[test]
fn compare_flattens_list_operands() {
    let output = run_output(
        "main(){
            store(l,list(1,2))
            print(compare(l,lesser,3))
            print(compare(l,greater,3))
        }",
    );
    assert_eq!(output, vec!["true", "false"]);
}

#[test]
fn compare_reads_variables_against_literals() {
    let output = run_output(
        "main(){ store(i,int(2)) print(compare(i,lesser,3)) print(compare(i,lesser,2)) }",
    );
    assert_eq!(output, vec!["true", "false"]);
}

#[test]
fn int_of_float_truncates_toward_zero() {
    let output = run_output("main(){ print(int(float(7))) print(int()) }");
    assert_eq!(output, vec!["7", "0"]);
}

#[test]
fn float_of_int_widens() {
    let output = run_output("main(){ print(float(3)) print(float()) }");
    assert_eq!(output, vec!["3", "0"]);
}

#[test]
fn empty_constructors_yield_defaults() {
    let output = run_output(
        "main(){ print(bool()) print(string()) print(coord()) print(zone()) print(direction()) }",
    );
    assert_eq!(output, vec!["false", "", "(0,0)", "((0,0),(0,0))", "N"]);
}

#[test]
fn print_representations_cover_every_category() {
    let output = run_output(
        "main(){
            print(coord(3,4))
            print(zone(coord(0,0),coord(8,8)))
            print(NORTHE)
            print(true)
            print(7)
        }",
    );
    assert_eq!(output, vec!["(3,4)", "((0,0),(8,8))", "NE", "true", "7"]);
}

#[test]
fn print_emits_each_string_operand_in_order() {
    let output = run_output("main(){ print(\"a\",\"b\",\"c\") print() }");
    assert_eq!(output, vec!["a", "b", "c"]);
}

#[test]
fn lists_flatten_scalars_loads_and_nested_lists() {
    let output = run_output(
        "main(){
            store(l,list(1,2))
            store(m,list(l,3,list(4,5)))
            print(m)
        }",
    );
    assert_eq!(output, vec!["[1,2,3,4,5]"]);
}

#[test]
fn coord_wraps_and_builds_from_components() {
    let output = run_output(
        "main(){ store(c,coord(1,2)) print(coord(c)) print(coord(int(5),6)) }",
    );
    assert_eq!(output, vec!["(1,2)", "(5,6)"]);
}

#[test]
fn zone_builds_from_stored_corners() {
    let output = run_output(
        "main(){
            store(tl,coord(1,1))
            store(br,coord(9,9))
            print(zone(tl,br))
        }",
    );
    assert_eq!(output, vec!["((1,1),(9,9))"]);
}

#[test]
fn wait_converts_amount_and_unit_to_milliseconds() {
    let script = compile(
        "main(){ wait(2,SECOND) wait(30,MILLISECOND) wait(1,MINUTE) }",
    );
    let mut surface = BufferSurface::new();
    script.run(&mut surface).unwrap();
    assert_eq!(
        surface.suspensions(),
        vec![
            Duration::from_millis(2_000),
            Duration::from_millis(30),
            Duration::from_millis(60_000),
        ]
    );
}

#[test]
fn wait_float_overload_truncates_the_product() {
    let script = compile("main(){ wait(float(2),SECOND) }");
    let mut surface = BufferSurface::new();
    script.run(&mut surface).unwrap();
    assert_eq!(surface.suspensions(), vec![Duration::from_millis(2_000)]);
}

#[test]
fn bare_expression_statements_are_evaluated_and_discarded() {
    let output = run_output("main(){ int(3) and(true) compare() print(\"end\") }");
    assert_eq!(output, vec!["end"]);
}
