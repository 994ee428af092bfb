//! Integration tests for the iTIP validator.

mod calendar;
mod consistency;
mod event;
mod freebusy;
mod journal;
mod tables;
mod todo;
