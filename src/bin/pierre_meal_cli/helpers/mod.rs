// ABOUTME: Helper modules for pierre-meal-cli
// ABOUTME: Configuration resolution shared by the commands

pub mod config;
