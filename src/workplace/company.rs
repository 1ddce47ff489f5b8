//! Company state: roster, schedule, ledgers and hiring

use std::collections::{BTreeMap, BTreeSet, HashSet};

use rand::Rng;
use tracing::info;

use crate::error::{Result, WorkplaceError};
use crate::workplace::history::DayLog;
use crate::workplace::params::CompanyParams;
use crate::workplace::people::{sample_wage, Applicant, Employee, Person, PersonGenerator};
use crate::workplace::types::{EmployeeId, Weekday};

/// A small business and everyone who works there
#[derive(Clone, Debug)]
pub struct Company {
    pub params: CompanyParams,
    /// Current employees
    pub employees: BTreeMap<EmployeeId, Employee>,
    /// Employees who quit; kept so history and payroll can still name them
    pub former_employees: BTreeMap<EmployeeId, Employee>,
    /// Who is on shift today
    pub scheduled_today: BTreeSet<EmployeeId>,
    /// Days each employee can't be scheduled
    pub unavailable_days: BTreeMap<EmployeeId, u32>,
    /// Working days per week each employee wants
    pub target_days: BTreeMap<EmployeeId, u32>,
    /// Days with any hours so far this week
    pub days_worked: BTreeMap<EmployeeId, u32>,
    /// Hours logged so far this week
    pub weekly_hours: BTreeMap<EmployeeId, u32>,
    /// Hours logged today, credited at departure or close
    pub punch_card: BTreeMap<EmployeeId, u32>,
    pub day_of_week: Weekday,
    /// One entry per opened day
    pub history: Vec<DayLog>,
    /// Nicknames already handed out in this company
    pub used_nicknames: HashSet<String>,
    /// Sign-on bonuses owed with the next weekly report
    pub pending_bonuses: Vec<(EmployeeId, f64)>,
    people: PersonGenerator,
    next_id: u32,
}

impl Company {
    /// An empty company
    pub fn new(params: CompanyParams) -> Self {
        let people = PersonGenerator::new(params.middle_initial_chance);
        Company {
            params,
            employees: BTreeMap::new(),
            former_employees: BTreeMap::new(),
            scheduled_today: BTreeSet::new(),
            unavailable_days: BTreeMap::new(),
            target_days: BTreeMap::new(),
            days_worked: BTreeMap::new(),
            weekly_hours: BTreeMap::new(),
            punch_card: BTreeMap::new(),
            day_of_week: Weekday::MONDAY,
            history: Vec::new(),
            used_nicknames: HashSet::new(),
            pending_bonuses: Vec::new(),
            people,
            next_id: 0,
        }
    }

    /// Staff a new company with a random head count
    pub fn generate<R: Rng>(params: CompanyParams, rng: &mut R) -> Result<Self> {
        let mut company = Company::new(params);
        let (lo, hi) = ordered(company.params.min_headcount, company.params.max_headcount);
        let headcount = rng.gen_range(lo..=hi);

        for _ in 0..headcount {
            let employee = company.new_employee(rng);
            let id = company.hire(employee, rng)?;
            let unavailable = rng.gen_range(0..=company.params.max_initial_unavailable);
            company.unavailable_days.insert(id, unavailable);
        }

        info!(headcount, "company generated");
        Ok(company)
    }

    pub fn person_generator(&self) -> &PersonGenerator {
        &self.people
    }

    fn allocate_id(&mut self) -> EmployeeId {
        let id = EmployeeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Generate a candidate employee with a fresh id; they are not hired yet
    pub fn new_employee<R: Rng>(&mut self, rng: &mut R) -> Employee {
        let id = self.allocate_id();
        let mut employee =
            Employee::generate(id, &self.people, self.params.min_age, self.params.max_age, rng);
        employee.hourly_wage = self.draw_wage(rng);
        employee
    }

    /// Generate an applicant for the hiring menu
    pub fn new_applicant<R: Rng>(&mut self, rng: &mut R) -> Applicant {
        let id = self.allocate_id();
        let mut applicant =
            Applicant::generate(id, &self.people, self.params.min_age, self.params.max_age, rng);
        applicant.employee.hourly_wage = self.draw_wage(rng);
        applicant
    }

    fn draw_wage<R: Rng>(&self, rng: &mut R) -> f64 {
        sample_wage(self.params.hourly_wage, self.params.hourly_wage_spread, rng)
    }

    /// Hire with a random weekly target, available immediately
    pub fn hire<R: Rng>(&mut self, employee: Employee, rng: &mut R) -> Result<EmployeeId> {
        let (lo, hi) = ordered(self.params.min_target_days, self.params.max_target_days);
        let target = rng.gen_range(lo..=hi);
        self.hire_with(employee, 0, target, rng)
    }

    /// Hire an applicant on their own terms; the bonus is paid with the next weekly report
    pub fn hire_applicant<R: Rng>(&mut self, applicant: Applicant, rng: &mut R) -> Result<EmployeeId> {
        let bonus = applicant.sign_on_bonus;
        let id = self.hire_with(
            applicant.employee,
            applicant.start_delay,
            applicant.desired_workdays,
            rng,
        )?;
        if bonus > 0.0 {
            self.pending_bonuses.push((id, bonus));
        }
        Ok(id)
    }

    /// Add an employee to the roster.
    ///
    /// Coworkers sharing the new hire's first name all get distinguishing
    /// nicknames. If the nickname pool runs dry the hire is rejected and the
    /// company is left untouched.
    pub fn hire_with<R: Rng>(
        &mut self,
        mut employee: Employee,
        start_delay: u32,
        target_days: u32,
        rng: &mut R,
    ) -> Result<EmployeeId> {
        let namesakes: Vec<EmployeeId> = self
            .employees
            .values()
            .filter(|e| e.person.first_name == employee.person.first_name)
            .map(|e| e.id)
            .collect();

        if !namesakes.is_empty() {
            let mut taken = self.used_nicknames.clone();
            taken.extend(self.employees.values().map(|e| e.person.first_name.clone()));
            taken.insert(employee.person.first_name.clone());

            let mut people: Vec<Person> = namesakes
                .iter()
                .filter_map(|id| self.employees.get(id))
                .map(|e| e.person.clone())
                .collect();
            people.push(employee.person.clone());

            self.people.give_distinguishing_nicknames(&mut people, &mut taken, rng)?;

            if let Some(hired) = people.pop() {
                employee.person.nickname = hired.nickname;
            }
            for (id, person) in namesakes.iter().zip(people) {
                if let Some(e) = self.employees.get_mut(id) {
                    e.person.nickname = person.nickname;
                }
            }
        }

        if self.employees.contains_key(&employee.id) || self.former_employees.contains_key(&employee.id) {
            employee.id = self.allocate_id();
        }
        self.next_id = self.next_id.max(employee.id.0.saturating_add(1));

        if let Some(nick) = &employee.person.nickname {
            self.used_nicknames.insert(nick.clone());
        }
        for id in &namesakes {
            if let Some(nick) = self.employees.get(id).and_then(|e| e.person.nickname.clone()) {
                self.used_nicknames.insert(nick);
            }
        }

        let id = employee.id;
        info!(%id, name = %employee.full_name(), start_delay, target_days, "hired");
        self.employees.insert(id, employee);
        self.unavailable_days.insert(id, start_delay);
        self.target_days.insert(id, target_days);
        self.days_worked.insert(id, 0);
        self.weekly_hours.entry(id).or_insert(0);
        Ok(id)
    }

    /// Remove an employee for good, keeping their record for narration and payroll
    pub fn dismiss(&mut self, id: EmployeeId) -> Option<&Employee> {
        let employee = self.employees.remove(&id)?;
        self.scheduled_today.remove(&id);
        self.unavailable_days.remove(&id);
        self.target_days.remove(&id);
        self.days_worked.remove(&id);
        info!(%id, name = %employee.full_name(), "left the company");
        self.former_employees.insert(id, employee);
        self.former_employees.get(&id)
    }

    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.get(&id)
    }

    pub fn employee_mut(&mut self, id: EmployeeId) -> Option<&mut Employee> {
        self.employees.get_mut(&id)
    }

    /// Look up a current or former employee
    pub fn record(&self, id: EmployeeId) -> Result<&Employee> {
        self.employees
            .get(&id)
            .or_else(|| self.former_employees.get(&id))
            .ok_or(WorkplaceError::UnknownEmployee(id))
    }

    /// Find a current employee by nickname, first name, last name or full name
    pub fn find_by_name(&self, name: &str) -> Option<EmployeeId> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        let matches = |e: &&Employee| {
            let p = &e.person;
            p.nickname.as_deref().map(str::to_lowercase).as_deref() == Some(needle.as_str())
                || p.first_name.to_lowercase() == needle
                || p.last_name.to_lowercase() == needle
                || p.full_name().to_lowercase() == needle
        };
        self.employees.values().find(matches).map(|e| e.id)
    }

    pub fn is_scheduled(&self, id: EmployeeId) -> bool {
        self.scheduled_today.contains(&id)
    }

    pub fn headcount(&self) -> usize {
        self.employees.len()
    }

    pub fn unavailable_for(&self, id: EmployeeId) -> u32 {
        self.unavailable_days.get(&id).copied().unwrap_or(0)
    }

    pub fn set_unavailable(&mut self, id: EmployeeId, days: u32) {
        if self.employees.contains_key(&id) {
            self.unavailable_days.insert(id, days);
        }
    }

    /// Record hours worked today for someone leaving before close
    pub fn credit_hours(&mut self, id: EmployeeId, hours: u32) {
        *self.punch_card.entry(id).or_insert(0) += hours;
    }

    /// The day currently being played, if one has been opened
    pub fn today(&self) -> Option<&DayLog> {
        self.history.last()
    }

    pub(crate) fn today_mut(&mut self) -> Option<&mut DayLog> {
        self.history.last_mut()
    }
}

fn ordered(a: u32, b: u32) -> (u32, u32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
