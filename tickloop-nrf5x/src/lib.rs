//! A tickloop [`TickSource`] for the nRF51 and nRF52-series MCUs.
//!
//! Select the chip with exactly one of the Cargo features `51`, `52805`, `52810`, `52811`,
//! `52832`, `52833` or `52840`. Without a chip feature this crate is empty.
//!
//! [`TickSource`]: tickloop::TickSource

#![no_std]

#[cfg(feature = "51")]
use nrf51_pac as pac;

#[cfg(feature = "52805")]
use nrf52805_pac as pac;

#[cfg(feature = "52810")]
use nrf52810_pac as pac;

#[cfg(feature = "52811")]
use nrf52811_pac as pac;

#[cfg(feature = "52832")]
use nrf52832_pac as pac;

#[cfg(feature = "52833")]
use nrf52833_pac as pac;

#[cfg(feature = "52840")]
use nrf52840_pac as pac;

#[cfg(any(
    feature = "51",
    feature = "52805",
    feature = "52810",
    feature = "52811",
    feature = "52832",
    feature = "52833",
    feature = "52840",
))]
pub mod timer;
