//! Daily scheduling and the weekly pay cycle
//!
//! A day goes pre-day -> staffed -> post-day: [`Company::start_of_day`]
//! posts the schedule, events run, then [`Company::end_of_day`] closes the
//! books. Closing the last day of the week also runs
//! [`Company::end_of_week`], so the two day calls are enough to drive a
//! company indefinitely.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::workplace::company::Company;
use crate::workplace::history::DayLog;
use crate::workplace::report::{BonusLine, PayLine, WeeklyReport};
use crate::workplace::types::{EmployeeId, Weekday, SHIFT_HOURS};

/// After this many passes everyone still eligible is added outright
pub const MAX_SCHEDULING_PASSES: u32 = 32;

/// Chance an eligible, unforced employee is added during a pass
const VOLUNTEER_CHANCE: f64 = 0.5;

/// Result of closing a day
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DayClose {
    pub labor_hours: u32,
    /// Present when this day finished the week
    pub weekly_report: Option<WeeklyReport>,
}

/// Result of opening a day
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStart {
    pub day: u32,
    pub weekday: Weekday,
    pub scheduled: Vec<EmployeeId>,
    pub understaffed: bool,
}

impl Company {
    /// Open a new day: fresh history entry, empty punch card, new schedule
    pub fn start_of_day<R: Rng>(&mut self, rng: &mut R) -> DayStart {
        let day = self.history.len() as u32 + 1;
        self.punch_card.clear();
        let understaffed = self.fill_schedule(rng);

        let scheduled: Vec<EmployeeId> = self.scheduled_today.iter().copied().collect();
        let mut log = DayLog::new(day, self.day_of_week);
        log.scheduled = scheduled.clone();
        log.understaffed = understaffed;
        self.history.push(log);

        debug!(day, weekday = %self.day_of_week, staff = scheduled.len(), "day opened");
        DayStart {
            day,
            weekday: self.day_of_week,
            scheduled,
            understaffed,
        }
    }

    /// Can this employee be put on today's shift?
    pub fn is_eligible(&self, id: EmployeeId) -> bool {
        if !self.employees.contains_key(&id) || self.unavailable_for(id) > 0 {
            return false;
        }
        let target = self.target_days.get(&id).copied().unwrap_or(0);
        let worked = self.weekly_hours.get(&id).copied().unwrap_or(0);
        worked < target * SHIFT_HOURS
    }

    /// Target days still to be worked this week
    pub fn remaining_target_days(&self, id: EmployeeId) -> u32 {
        let target = self.target_days.get(&id).copied().unwrap_or(0);
        let worked = self.days_worked.get(&id).copied().unwrap_or(0);
        target.saturating_sub(worked)
    }

    /// Greedy fill; returns true when the shift ends up understaffed
    fn fill_schedule<R: Rng>(&mut self, rng: &mut R) -> bool {
        self.scheduled_today.clear();
        let days_left = self.day_of_week.days_left();
        let min = self.params.min_shift_size;
        let mut understaffed = false;
        let mut passes = 0;

        while self.scheduled_today.len() < min {
            let candidates: Vec<EmployeeId> = self
                .employees
                .keys()
                .copied()
                .filter(|id| !self.scheduled_today.contains(id) && self.is_eligible(*id))
                .collect();
            if candidates.is_empty() {
                understaffed = true;
                warn!(
                    weekday = %self.day_of_week,
                    scheduled = self.scheduled_today.len(),
                    min_shift_size = min,
                    "understaffed"
                );
                break;
            }

            passes += 1;
            let force_all = passes >= MAX_SCHEDULING_PASSES;
            for id in candidates {
                let forced = force_all || days_left <= self.remaining_target_days(id);
                if forced || rng.gen_bool(VOLUNTEER_CHANCE) {
                    self.scheduled_today.insert(id);
                }
            }
        }

        let max = self.params.max_shift_size;
        if self.scheduled_today.len() > max {
            let pool: Vec<EmployeeId> = self.scheduled_today.iter().copied().collect();
            self.scheduled_today = pool.choose_multiple(rng, max).copied().collect();
        }
        understaffed
    }

    /// Close the day: book hours, advance the calendar and, when the week
    /// wraps around, run payroll
    pub fn end_of_day(&mut self) -> DayClose {
        for id in &self.scheduled_today {
            *self.punch_card.entry(*id).or_insert(0) += SHIFT_HOURS;
        }

        let mut total = 0;
        for (id, hours) in &self.punch_card {
            *self.weekly_hours.entry(*id).or_insert(0) += hours;
            if *hours > 0 && self.employees.contains_key(id) {
                *self.days_worked.entry(*id).or_insert(0) += 1;
            }
            total += hours;
        }

        self.day_of_week = self.day_of_week.next();
        for days in self.unavailable_days.values_mut() {
            if *days > 0 {
                *days -= 1;
            }
        }

        if let Some(log) = self.today_mut() {
            log.labor_hours = total;
        }
        debug!(labor_hours = total, "day closed");

        let weekly_report = (self.day_of_week == Weekday::MONDAY).then(|| self.end_of_week());
        DayClose {
            labor_hours: total,
            weekly_report,
        }
    }

    /// Pay everyone for the week and reset the weekly ledgers
    pub fn end_of_week(&mut self) -> WeeklyReport {
        let week = (self.history.len() as u32).div_ceil(7).max(1);

        let mut report = WeeklyReport {
            week,
            operating_expenses: self.params.weekly_operating_expenses,
            ..Default::default()
        };

        for (id, hours) in &self.weekly_hours {
            let name = self.full_name_of(*id);
            if *hours > 0 {
                let rate = self.wage_of(*id);
                let pay = *hours as f64 * rate;
                report.labor_hours += hours;
                report.wages += pay;
                report.pay.push(PayLine {
                    employee: *id,
                    name,
                    hours: *hours,
                    rate,
                    pay,
                });
            } else if self.employees.contains_key(id) {
                report.unscheduled.push(name);
            }
        }

        for (id, amount) in std::mem::take(&mut self.pending_bonuses) {
            report.bonuses.push(BonusLine {
                employee: id,
                name: self.full_name_of(id),
                amount,
            });
        }
        report.revenue = report.labor_hours as f64 * self.params.hourly_revenue;

        self.weekly_hours = self.employees.keys().map(|id| (*id, 0)).collect();
        for worked in self.days_worked.values_mut() {
            *worked = 0;
        }

        info!(week, labor_hours = report.labor_hours, profit = report.profit(), "week closed");
        report
    }

    fn wage_of(&self, id: EmployeeId) -> f64 {
        self.record(id)
            .map(|e| e.hourly_wage)
            .unwrap_or(self.params.hourly_wage)
    }

    fn full_name_of(&self, id: EmployeeId) -> String {
        self.record(id)
            .map(|e| e.full_name())
            .unwrap_or_else(|_| id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workplace::params::CompanyParams;
    use crate::workplace::testing::staff;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_forced_path_schedules_everyone() {
        let (mut company, ids) = staff(5);
        company.day_of_week = Weekday::new(2);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let start = company.start_of_day(&mut rng);
        assert!(!start.understaffed);
        assert_eq!(start.scheduled, ids);
    }

    #[test]
    fn test_unavailable_never_scheduled() {
        let (mut company, ids) = staff(8);
        company.set_unavailable(ids[0], 3);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..20 {
            company.start_of_day(&mut rng);
            assert!(!company.is_scheduled(ids[0]));
            company.scheduled_today.clear();
        }
    }

    #[test]
    fn test_understaffed_when_nobody_left() {
        let (mut company, ids) = staff(3);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let start = company.start_of_day(&mut rng);
        assert!(start.understaffed);
        assert_eq!(start.scheduled.len(), 3);
        assert!(company.today().unwrap().understaffed);
        assert_eq!(start.scheduled, ids);
    }

    #[test]
    fn test_schedule_capped_at_max() {
        let params = CompanyParams {
            min_shift_size: 8,
            max_shift_size: 8,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut company = Company::new(params);
        for _ in 0..20 {
            let e = company.new_employee(&mut rng);
            company.hire_with(e, 0, 6, &mut rng).unwrap();
        }
        let start = company.start_of_day(&mut rng);
        assert_eq!(start.scheduled.len(), 8);
        assert!(!start.understaffed);
    }

    #[test]
    fn test_end_of_day_books_hours() {
        let (mut company, ids) = staff(5);
        company.credit_hours(ids[4], 3);
        company.scheduled_today.remove(&ids[4]);
        company.unavailable_days.insert(ids[3], 2);

        let close = company.end_of_day();

        assert_eq!(close.labor_hours, 4 * SHIFT_HOURS + 3);
        assert!(close.weekly_report.is_none());
        assert_eq!(company.weekly_hours[&ids[0]], SHIFT_HOURS);
        assert_eq!(company.weekly_hours[&ids[4]], 3);
        assert_eq!(company.days_worked[&ids[4]], 1);
        assert_eq!(company.day_of_week, Weekday::new(1));
        assert_eq!(company.unavailable_for(ids[3]), 1);
    }

    #[test]
    fn test_target_met_means_ineligible() {
        let (mut company, ids) = staff(1);
        company.target_days.insert(ids[0], 1);
        company.end_of_day();
        assert!(!company.is_eligible(ids[0]));
        assert_eq!(company.remaining_target_days(ids[0]), 0);
    }

    #[test]
    fn test_week_rollover_pays_and_resets() {
        let (mut company, ids) = staff(3);
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        company.pending_bonuses.push((ids[2], 1.5));
        company.start_of_day(&mut rng);
        company.scheduled_today.remove(&ids[2]);
        company.end_of_day();

        let report = company.end_of_week();
        assert_eq!(report.week, 1);
        assert_eq!(report.pay.len(), 2);
        assert_eq!(report.labor_hours, 2 * SHIFT_HOURS);
        assert!((report.wages - 2.7).abs() < 1e-9);
        assert_eq!(report.unscheduled.len(), 1);
        assert_eq!(report.bonuses.len(), 1);
        assert!(company.pending_bonuses.is_empty());
        assert!(company.weekly_hours.values().all(|h| *h == 0));
        assert!(company.days_worked.values().all(|d| *d == 0));
    }

    #[test]
    fn test_day_calls_alone_carry_into_next_week() {
        let (mut company, _) = staff(8);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut weeks = Vec::new();

        for day in 1..=14u32 {
            let start = company.start_of_day(&mut rng);
            // Nobody has used up a five-day target by Wednesday
            if start.weekday.index() < 3 {
                assert!(!start.understaffed, "day {}", day);
                assert!(start.scheduled.len() >= company.params.min_shift_size);
            }
            let close = company.end_of_day();
            assert_eq!(close.weekly_report.is_some(), day % 7 == 0, "day {}", day);
            if let Some(report) = close.weekly_report {
                assert!(report.labor_hours > 0);
                weeks.push(report.week);
                assert!(company.weekly_hours.values().all(|h| *h == 0));
            }
        }

        assert_eq!(weeks, vec![1, 2]);
        let second_week: u32 = company.history[7..].iter().map(|log| log.labor_hours).sum();
        assert!(second_week > 0);
    }

    #[test]
    fn test_payroll_uses_each_employees_rate() {
        let (mut company, ids) = staff(2);
        company.employee_mut(ids[1]).unwrap().hourly_wage = 0.25;
        company.end_of_day();

        let report = company.end_of_week();
        let pay: Vec<(f64, f64)> = report.pay.iter().map(|l| (l.rate, l.pay)).collect();
        assert!((pay[0].1 - 1.35).abs() < 1e-9);
        assert_eq!(pay[1].0, 0.25);
        assert!((pay[1].1 - 2.0).abs() < 1e-9);
        assert!((report.wages - 3.35).abs() < 1e-9);
    }
}
