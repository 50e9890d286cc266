//! Travel route finder server.
//!
//! A web application that answers: "What is the cheapest way to get from
//! this place to that one?" by combining a ground journey to a nearby
//! airport with flights onwards to the destination.

pub mod airports;
pub mod config;
pub mod domain;
pub mod flights;
pub mod geo;
pub mod google;
pub mod ground;
pub mod planner;
pub mod providers;
pub mod web;
