// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors
// ABOUTME: Re-exports helper modules for hevy
// ABOUTME: Provides display functions shared by the command handlers

pub mod display;
