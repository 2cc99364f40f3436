#![cfg(test)]

mod fixtures;
mod pipeline;
