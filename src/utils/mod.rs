/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Shared constants

pub mod constants;
