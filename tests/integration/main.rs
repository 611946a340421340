//! Integration test harness

mod desk_test;
mod e2e_test;
mod ledger_test;
