//! API route declarations (e.g., /api/action/*)

pub mod action_routes;
