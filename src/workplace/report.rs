//! Weekly payroll and profit report

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::workplace::types::EmployeeId;

/// One employee's pay for the week
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PayLine {
    pub employee: EmployeeId,
    pub name: String,
    pub hours: u32,
    /// Hourly rate the pay was computed at
    pub rate: f64,
    pub pay: f64,
}

/// A sign-on bonus paid out this week
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BonusLine {
    pub employee: EmployeeId,
    pub name: String,
    pub amount: f64,
}

/// Summary of a finished work week
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklyReport {
    /// Week number, starting at 1
    pub week: u32,
    pub pay: Vec<PayLine>,
    /// Current employees who logged no hours
    pub unscheduled: Vec<String>,
    pub bonuses: Vec<BonusLine>,
    pub labor_hours: u32,
    pub wages: f64,
    pub operating_expenses: f64,
    pub revenue: f64,
}

impl WeeklyReport {
    pub fn bonus_total(&self) -> f64 {
        self.bonuses.iter().map(|b| b.amount).sum()
    }

    pub fn expenses(&self) -> f64 {
        self.wages + self.operating_expenses + self.bonus_total()
    }

    pub fn profit(&self) -> f64 {
        self.revenue - self.expenses()
    }
}

impl fmt::Display for WeeklyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Week {} payroll ===", self.week)?;
        for line in &self.pay {
            writeln!(
                f,
                "  {:<32} {:>3} hrs @ ${:.3}  ${:>7.2}",
                line.name, line.hours, line.rate, line.pay
            )?;
        }
        if !self.unscheduled.is_empty() {
            writeln!(f, "  Not scheduled this week: {}", self.unscheduled.join(", "))?;
        }
        for bonus in &self.bonuses {
            writeln!(f, "  Sign-on bonus for {:<20} ${:>7.2}", bonus.name, bonus.amount)?;
        }
        writeln!(f, "  Labor hours:        {:>9}", self.labor_hours)?;
        writeln!(f, "  Wages:              ${:>8.2}", self.wages)?;
        writeln!(f, "  Bonuses:            ${:>8.2}", self.bonus_total())?;
        writeln!(f, "  Operating expenses: ${:>8.2}", self.operating_expenses)?;
        writeln!(f, "  Revenue:            ${:>8.2}", self.revenue)?;
        write!(f, "  Profit:             ${:>8.2}", self.profit())
    }
}
