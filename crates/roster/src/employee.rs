//! Subordinate records and their weak back-reference to a manager

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::trace;

use crate::manager::Manager;
use crate::stats;

/// The owned side of the graph.
///
/// An `Employee` lives on its manager's roster chain, which holds the only
/// long-lived strong handle to it. The `boss` field is a weak
/// back-reference: good for lookup, useless for keeping the manager alive
/// or for releasing it.
#[derive(Debug)]
pub struct Employee {
    /// The employee's name
    name: String,

    /// Non-owning back-reference to the supervising manager
    boss: RefCell<Weak<Manager>>,

    /// Owning link to the next record on the roster chain
    next_employee: RefCell<Option<Rc<Employee>>>,
}

impl Employee {
    /// Allocate an unlinked record. Wiring it into a chain is the
    /// manager's job.
    pub(crate) fn new(name: impl Into<String>) -> Rc<Self> {
        stats::employee_allocated();
        Rc::new(Self {
            name: name.into(),
            boss: RefCell::new(Weak::new()),
            next_employee: RefCell::new(None),
        })
    }

    /// The employee's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The supervising manager, if it is still alive.
    ///
    /// Returns `None` once the manager has been released, or after this
    /// record has been dismissed from its roster.
    pub fn boss(&self) -> Option<Rc<Manager>> {
        self.boss.borrow().upgrade()
    }

    /// The next record on the roster chain.
    ///
    /// `None` for the last record — including the single employee of a
    /// freshly established pair, which never has a successor.
    pub fn next_employee(&self) -> Option<Rc<Employee>> {
        self.next_employee.borrow().clone()
    }

    pub(crate) fn set_boss(&self, boss: Weak<Manager>) {
        *self.boss.borrow_mut() = boss;
    }

    pub(crate) fn clear_boss(&self) {
        *self.boss.borrow_mut() = Weak::new();
    }

    pub(crate) fn set_next(&self, next: Option<Rc<Employee>>) {
        *self.next_employee.borrow_mut() = next;
    }

    pub(crate) fn take_next(&self) -> Option<Rc<Employee>> {
        self.next_employee.borrow_mut().take()
    }
}

impl Drop for Employee {
    fn drop(&mut self) {
        stats::employee_released();
        trace!("released employee record: {}", self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_unlinked() {
        let employee = Employee::new("Otis");

        assert!(employee.boss().is_none());
        assert!(employee.next_employee().is_none());
    }

    #[test]
    fn test_back_reference_does_not_keep_manager_alive() {
        let employee = Employee::new("Otis");

        {
            let manager = Manager::new("Mira");
            employee.set_boss(Rc::downgrade(&manager));
            assert!(employee.boss().is_some());
        }

        // Manager released; the weak reference observes it.
        assert!(employee.boss().is_none());
    }

    #[test]
    fn test_clear_boss_detaches_the_back_reference() {
        let manager = Manager::new("Mira");
        let employee = Employee::new("Otis");
        employee.set_boss(Rc::downgrade(&manager));

        employee.clear_boss();

        assert!(employee.boss().is_none());
    }
}
