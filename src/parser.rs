//! This module provides the parser for machine descriptions, utilizing the
//! `pest` crate. It defines functions to turn `.turc` description text into a
//! `Machine` value.

use crate::types::{Direction, Machine, ParseError, Transition};
use pest::{
    iterators::{Pair, Pairs},
    Parser as PestParser,
};
use pest_derive::Parser as PestParser;

/// Derives a `PestParser` for the description grammar defined in `grammar.pest`.
#[derive(PestParser)]
#[grammar = "grammar.pest"]
pub struct DescriptionParser;

/// Parses the given description text into a `Machine`.
///
/// This is the main entry point for parsing machine descriptions. The grammar
/// is exact: one initial-state line, one default-symbol line, then zero or
/// more transition lines with single-space separators. Nothing is trimmed.
///
/// # Arguments
///
/// * `source` - A string slice containing the machine description.
///
/// # Returns
///
/// * `Ok(Machine)` if the input is successfully parsed.
/// * `Err(ParseError::InvalidDirection)` if a transition line carries a
///   direction token other than `<-` or `->`.
/// * `Err(ParseError::Malformed)` for any other structural violation.
pub fn parse(source: &str) -> Result<Machine, ParseError> {
    let root = DescriptionParser::parse(Rule::machine, source)
        .map_err(|e| ParseError::Malformed(Box::new(e)))?
        .next()
        .unwrap();

    parse_machine(root)
}

/// Parses the top-level structure of a description from a `Pair<Rule::machine>`.
///
/// The grammar guarantees the initial state and default value are present and
/// ordered, so this only has to walk the pairs. No partially constructed
/// machine can escape: the first invalid transition aborts the whole build.
fn parse_machine(pair: Pair<Rule>) -> Result<Machine, ParseError> {
    let mut pairs = pair.into_inner();

    let initial_state = parse_string(&mut pairs);
    let default_value = parse_symbol(&mut pairs);

    let mut transitions = Vec::new();
    for p in pairs {
        if p.as_rule() == Rule::transition {
            transitions.push(parse_transition(p)?);
        }
    }

    Ok(Machine {
        initial_state,
        default_value,
        transitions,
    })
}

/// Parses a single transition line from a `Pair<Rule::transition>`.
///
/// Field order mirrors the line format: `state value new_value direction new_state`.
fn parse_transition(pair: Pair<Rule>) -> Result<Transition, ParseError> {
    let mut pairs = pair.into_inner();

    let state = parse_string(&mut pairs);
    let value = parse_symbol(&mut pairs);
    let new_value = parse_symbol(&mut pairs);
    let direction = parse_direction(pairs.next().unwrap())?;
    let new_state = parse_string(&mut pairs);

    Ok(Transition {
        state,
        value,
        new_value,
        direction,
        new_state,
    })
}

/// Parses a direction token. Only `<-` and `->` are valid; the grammar
/// accepts any token here so the error can name the offender.
fn parse_direction(pair: Pair<Rule>) -> Result<Direction, ParseError> {
    match pair.as_str() {
        "<-" => Ok(Direction::Left),
        "->" => Ok(Direction::Right),
        other => Err(ParseError::InvalidDirection(other.to_string())),
    }
}

/// Extracts the string content from the current `Pair` in a `Pairs` iterator.
fn parse_string(pairs: &mut Pairs<Rule>) -> String {
    pairs.next().unwrap().as_str().into()
}

/// Extracts a single-character symbol from the current `Pair` in a `Pairs`
/// iterator. The grammar guarantees the token is exactly one character.
fn parse_symbol(pairs: &mut Pairs<Rule>) -> char {
    pairs.next().unwrap().as_str().chars().next().unwrap()
}
