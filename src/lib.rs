//! Collection types built around owning node chains.

#![no_std]

extern crate alloc;

pub mod linked_list;
