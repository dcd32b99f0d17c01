//! Supervisory records owning a chain of employees

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, trace};

use crate::employee::Employee;
use crate::error::{Result, RosterError};
use crate::stats;

/// Allocate one [`Manager`] and one [`Employee`], link them mutually, and
/// return the sole strong handle to the manager.
///
/// The employee is owned by the manager's chain; its back-reference to the
/// manager is weak. Dropping the returned handle therefore releases both
/// records, in order, with no teardown sequence to get wrong.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
///
/// let manager = roster::establish("Mira", "Otis");
/// let employee = manager.first_employee().unwrap();
///
/// assert!(Rc::ptr_eq(&employee.boss().unwrap(), &manager));
/// assert!(employee.next_employee().is_none());
/// ```
pub fn establish(manager: impl Into<String>, employee: impl Into<String>) -> Rc<Manager> {
    let manager = Manager::new(manager);
    let employee = Employee::new(employee);

    employee.set_boss(Rc::downgrade(&manager));
    *manager.first_employee.borrow_mut() = Some(employee);

    manager
}

/// The supervisory side of the graph.
///
/// A `Manager` holds the only long-lived strong handles to its employees:
/// the roster is a chain threaded through each employee's `next_employee`
/// link, anchored at `first_employee`. Strong ownership flows only downward
/// (caller to manager to chain), so the mutual references between a manager
/// and its employees never form a strong cycle.
///
/// # Example
///
/// ```
/// use roster::Manager;
///
/// let manager = Manager::new("Mira");
/// manager.hire("Otis").unwrap();
/// manager.hire("Pell").unwrap();
///
/// assert_eq!(manager.headcount(), 2);
/// assert_eq!(manager.first_employee().unwrap().name(), "Pell");
/// ```
#[derive(Debug)]
pub struct Manager {
    /// The manager's name
    name: String,

    /// Weak handle to this record's own allocation, cloned into each
    /// hire's back-reference
    self_handle: Weak<Manager>,

    /// Head of the owned employee chain (most recent hire)
    first_employee: RefCell<Option<Rc<Employee>>>,
}

impl Manager {
    /// Create a manager with an empty roster.
    pub fn new(name: impl Into<String>) -> Rc<Self> {
        stats::manager_allocated();
        Rc::new_cyclic(|handle| Self {
            name: name.into(),
            self_handle: handle.clone(),
            first_employee: RefCell::new(None),
        })
    }

    /// The manager's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    // ═══════════════════════════════════════════════════════════════════
    // Roster Changes (Hire / Dismiss)
    // ═══════════════════════════════════════════════════════════════════

    /// Hire a new employee at the head of the roster chain.
    ///
    /// The new record's back-reference points at this manager, and its
    /// `next_employee` link takes the previous chain head. The returned
    /// handle is a convenience; the chain keeps the record alive.
    ///
    /// # Errors
    ///
    /// - `AlreadyEmployed` if the name is already on the roster
    pub fn hire(&self, name: impl Into<String>) -> Result<Rc<Employee>> {
        let name = name.into();
        if self.find(&name).is_some() {
            return Err(RosterError::AlreadyEmployed { name });
        }

        let employee = Employee::new(name);
        employee.set_boss(self.self_handle.clone());
        employee.set_next(self.first_employee.borrow_mut().take());
        *self.first_employee.borrow_mut() = Some(Rc::clone(&employee));

        debug!("{} hired {}", self.name, employee.name());
        Ok(employee)
    }

    /// Dismiss an employee, unlinking it from the roster chain.
    ///
    /// The chain's strong handle moves to the caller: the record is
    /// released when the returned handle is dropped. The dismissed
    /// record's back-reference is cleared and its successor link is
    /// spliced to the record before it.
    ///
    /// # Errors
    ///
    /// - `NotOnRoster` if nobody on the chain has the name
    pub fn dismiss(&self, name: &str) -> Result<Rc<Employee>> {
        let head = match self.first_employee() {
            Some(head) => head,
            None => {
                return Err(RosterError::NotOnRoster {
                    name: name.to_string(),
                })
            }
        };

        if head.name() == name {
            *self.first_employee.borrow_mut() = head.take_next();
            head.clear_boss();
            debug!("{} dismissed {}", self.name, name);
            return Ok(head);
        }

        let mut cursor = head;
        loop {
            let next = match cursor.next_employee() {
                Some(next) => next,
                None => {
                    return Err(RosterError::NotOnRoster {
                        name: name.to_string(),
                    })
                }
            };

            if next.name() == name {
                cursor.set_next(next.take_next());
                next.clear_boss();
                debug!("{} dismissed {}", self.name, name);
                return Ok(next);
            }

            cursor = next;
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Roster Lookup
    // ═══════════════════════════════════════════════════════════════════

    /// The head of the employee chain (most recent hire), if any.
    pub fn first_employee(&self) -> Option<Rc<Employee>> {
        self.first_employee.borrow().clone()
    }

    /// Iterate the roster chain, most recent hire first.
    pub fn employees(&self) -> Employees {
        Employees {
            cursor: self.first_employee(),
        }
    }

    /// Number of employees on the roster.
    pub fn headcount(&self) -> usize {
        self.employees().count()
    }

    /// Look up an employee by name.
    pub fn find(&self, name: &str) -> Option<Rc<Employee>> {
        self.employees().find(|employee| employee.name() == name)
    }
}

impl Drop for Manager {
    fn drop(&mut self) {
        // Unlink front-to-back so releasing a long chain stays off the
        // call stack.
        let mut next = self.first_employee.borrow_mut().take();
        while let Some(employee) = next {
            next = employee.take_next();
        }

        stats::manager_released();
        trace!("released manager record: {}", self.name);
    }
}

/// Iterator over a manager's employee chain, most recent hire first.
#[derive(Debug)]
pub struct Employees {
    cursor: Option<Rc<Employee>>,
}

impl Iterator for Employees {
    type Item = Rc<Employee>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor.take()?;
        self.cursor = current.next_employee();
        Some(current)
    }
}
