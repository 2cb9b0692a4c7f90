//! Outbound integrations.
//!
//! The page has no backend; [`contact::SimulatedSubmitter`] stands in for
//! the contact endpoint behind `pagecore::contact::ContactSubmitter`.

pub mod contact;
