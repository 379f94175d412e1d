//! HTTP handlers for the Campaigns domain

pub mod campaigns;
