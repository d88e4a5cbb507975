//! # lecture1
//! The console exercises from the first lecture of an introductory programming
//! course, written as a small library so every program can be driven from tests.
//!
//! Each program reads from a [`console::Console`] and writes back to it:
//! - [`calculator`] applies one of four arithmetic operations to two numbers,
//! - [`repeater`] prints a word a given number of times,
//! - [`greeter`] greets whoever typed their name,
//! - [`rectangle`] draws an ASCII rectangle and reads nothing at all.
//!
//! The executables living in `lecture1-cli` only wire these up to the
//! process's standard streams.
pub mod calculator;
pub mod config;
pub mod console;
pub mod greeter;
pub mod ops;
pub mod parser;
pub mod rectangle;
pub mod repeater;
