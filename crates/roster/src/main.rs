//! Builds the smallest possible roster, verifies its links, and tears it
//! down employee-first.

use std::rc::Rc;

use anyhow::{ensure, Context, Result};
use log::info;

use roster::stats;

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::new().filter_or("ROSTER_LOG", "info"));

    let manager = roster::establish("Mira", "Otis");

    let employee = manager
        .first_employee()
        .context("established roster has an empty chain")?;
    let boss = employee.boss().context("first employee has no living boss")?;
    ensure!(
        Rc::ptr_eq(&boss, &manager),
        "first employee's boss is not the established manager"
    );
    info!(
        "{} supervises {} employee(s), starting with {}",
        manager.name(),
        manager.headcount(),
        employee.name()
    );

    // Employee first, then the manager.
    let dismissed = manager.dismiss(employee.name())?;
    drop(employee);
    drop(boss);
    drop(dismissed);
    drop(manager);

    ensure!(
        stats::live_managers() == 0 && stats::live_employees() == 0,
        "record counts did not return to baseline"
    );
    info!("all records released, exiting clean");

    Ok(())
}
