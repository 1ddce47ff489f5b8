//! Interactive day loop and between-phase menus

use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;

use workplace_sim::workplace::{Company, DayStart, Employee, WeeklyReport, WorkplaceSim};

/// A command typed at the menu prompt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Debug(String),
    Talk(String),
    Listen,
    Hiring,
    Employees,
    Continue,
    Quit,
    Invalid,
}

impl Command {
    pub fn parse(input: &str) -> Command {
        let mut words = input.split_whitespace();
        let head = match words.next() {
            Some(w) => w.to_lowercase(),
            None => return Command::Continue,
        };
        let rest: Vec<&str> = words.collect();
        let name = rest.join(" ");

        match (head.as_str(), rest.is_empty()) {
            ("d" | "debug", false) => Command::Debug(name),
            ("t" | "talk", false) => Command::Talk(name),
            ("l" | "listen", true) => Command::Listen,
            ("h" | "hiring", true) => Command::Hiring,
            ("e" | "employees", true) => Command::Employees,
            ("q" | "quit", true) => Command::Quit,
            _ => Command::Invalid,
        }
    }
}

/// What the player wants after a menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuResult {
    Continue,
    Quit,
}

/// Line-based terminal session
pub struct Session<R, W> {
    input: R,
    out: W,
    player: Employee,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Session {
            input,
            out,
            player: Employee::outsider("Boss", "Hogg"),
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn confirm(&mut self) -> io::Result<MenuResult> {
        writeln!(self.out)?;
        write!(self.out, "{}", "[Press ENTER to continue]".dark_grey())?;
        self.out.flush()?;
        let answer = self.read_line()?;
        writeln!(self.out)?;
        Ok(match answer {
            None => MenuResult::Quit,
            Some(_) => MenuResult::Continue,
        })
    }

    /// Play days until the player quits or input runs out
    pub fn run(&mut self, sim: &mut WorkplaceSim) -> io::Result<()> {
        loop {
            let start = sim.open_day();
            self.print_day_start(&sim.company, &start)?;
            if self.menu(sim)? == MenuResult::Quit {
                return Ok(());
            }

            let events = sim.play_events();
            for narrated in &events {
                writeln!(self.out, "{}", narrated.narration)?;
                if self.confirm()? == MenuResult::Quit {
                    return Ok(());
                }
            }
            if events.is_empty() {
                let line = sim.quiet_day_line();
                writeln!(self.out, "{}", line)?;
                if self.confirm()? == MenuResult::Quit {
                    return Ok(());
                }
            }

            let close = sim.close_day();
            writeln!(self.out)?;
            writeln!(self.out, "Today's productivity: {} labor hours", close.labor_hours)?;
            if self.menu(sim)? == MenuResult::Quit {
                return Ok(());
            }

            if let Some(report) = close.weekly_report {
                self.print_week(&report)?;
                if self.confirm()? == MenuResult::Quit {
                    return Ok(());
                }
            }
        }
    }

    fn print_day_start(&mut self, company: &Company, start: &DayStart) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", format!("Day {} - {}", start.day, start.weekday).bold())?;
        writeln!(self.out, "----------")?;
        if start.understaffed {
            writeln!(self.out)?;
            writeln!(self.out, "{}", ">>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>".red())?;
            writeln!(self.out, "{}", "Understaffed!".red().bold())?;
            writeln!(self.out, "{}", ">>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>".red())?;
            writeln!(self.out)?;
        }
        writeln!(self.out, "Scheduled today:")?;
        for id in &start.scheduled {
            if let Some(e) = company.employee(*id) {
                writeln!(self.out, "\t- {}", e.full_name())?;
            }
        }
        Ok(())
    }

    fn print_week(&mut self, report: &WeeklyReport) -> io::Result<()> {
        writeln!(self.out, "{}", "End of week.".bold())?;
        writeln!(self.out, "{}", report)
    }

    /// Menu shown between phases of the day
    pub fn menu(&mut self, sim: &mut WorkplaceSim) -> io::Result<MenuResult> {
        loop {
            writeln!(self.out)?;
            writeln!(self.out, "{}", "OPTIONS".bold())?;
            writeln!(self.out, "-------")?;
            writeln!(self.out, "    [D]ebug <NAME> - Print debug info for a person")?;
            writeln!(self.out, "    [T]alk <NAME> - Talk to an employee about recent events")?;
            writeln!(self.out, "    [L]isten - Listen to the latest gossip")?;
            writeln!(self.out, "    [H]iring - Go to hiring menu")?;
            writeln!(self.out, "    [E]mployees - List current employees")?;
            writeln!(self.out, "    [Q]uit - Leave the simulation")?;
            writeln!(self.out, "    [ENTER] - Continue")?;
            write!(self.out, "> ")?;
            self.out.flush()?;

            let line = match self.read_line()? {
                Some(line) => line,
                None => return Ok(MenuResult::Quit),
            };
            match Command::parse(&line) {
                Command::Continue => return Ok(MenuResult::Continue),
                Command::Quit => return Ok(MenuResult::Quit),
                Command::Hiring => self.hiring(sim)?,
                Command::Talk(name) => self.talk(sim, &name)?,
                Command::Listen => self.listen(sim)?,
                Command::Debug(name) => self.debug(&sim.company, &name)?,
                Command::Employees => self.employees(&sim.company)?,
                Command::Invalid => writeln!(self.out, "Invalid command.")?,
            }
        }
    }

    fn debug(&mut self, company: &Company, name: &str) -> io::Result<()> {
        match company.find_by_name(name).and_then(|id| company.employee(id)) {
            Some(e) => {
                writeln!(self.out, "{:#?}", e)?;
                writeln!(
                    self.out,
                    "target {} days/week, worked {} days ({} hrs) this week, out for {} days",
                    company.target_days.get(&e.id).copied().unwrap_or(0),
                    company.days_worked.get(&e.id).copied().unwrap_or(0),
                    company.weekly_hours.get(&e.id).copied().unwrap_or(0),
                    company.unavailable_for(e.id),
                )
            }
            None => writeln!(self.out, "Employee not found."),
        }
    }

    fn talk(&mut self, sim: &mut WorkplaceSim, name: &str) -> io::Result<()> {
        let id = match sim.company.find_by_name(name) {
            Some(id) => id,
            None => return writeln!(self.out, "Employee not found."),
        };
        let who = sim.company.employee(id).map(|e| e.to_string()).unwrap_or_default();
        writeln!(self.out)?;
        writeln!(self.out, "{}", format!("TALKING TO {}", who).bold())?;
        writeln!(self.out, "-------------------------------")?;
        match sim.talk(id, &self.player) {
            Ok(line) => writeln!(self.out, "{}", line),
            Err(err) => writeln!(self.out, "{}", err),
        }
    }

    fn listen(&mut self, sim: &mut WorkplaceSim) -> io::Result<()> {
        match sim.listen() {
            Ok(remarks) => {
                for remark in remarks {
                    writeln!(self.out)?;
                    writeln!(self.out, "{}: {}", remark.name.as_str().cyan(), remark.line)?;
                }
                Ok(())
            }
            Err(_) => writeln!(self.out, "It's too quiet to overhear anything."),
        }
    }

    fn hiring(&mut self, sim: &mut WorkplaceSim) -> io::Result<()> {
        let mut pool = sim.applicants();
        writeln!(self.out, "{}", "HIRING".bold())?;
        writeln!(self.out, "------")?;

        loop {
            for (i, applicant) in pool.iter().enumerate() {
                writeln!(self.out, "{}. {}", i + 1, applicant.summary())?;
            }
            writeln!(self.out)?;
            write!(self.out, "> ")?;
            self.out.flush()?;

            let line = match self.read_line()? {
                Some(line) => line,
                None => return Ok(()),
            };
            match line.parse::<usize>() {
                Ok(n) if (1..=pool.len()).contains(&n) => {
                    let applicant = pool.remove(n - 1);
                    let name = applicant.employee.full_name();
                    match sim.hire(applicant) {
                        Ok(id) => {
                            let hired = sim.company.employee(id).map(|e| e.full_name()).unwrap_or(name);
                            writeln!(self.out, "{} was hired.", hired)?;
                        }
                        Err(err) => writeln!(self.out, "Could not hire {}: {}", name, err)?,
                    }
                    return Ok(());
                }
                Ok(_) => writeln!(self.out, "Invalid index.")?,
                Err(_) => match line.to_lowercase().as_str() {
                    "exit" | "quit" | "q" | "" => return Ok(()),
                    _ => writeln!(self.out, "Invalid input.")?,
                },
            }
        }
    }

    fn employees(&mut self, company: &Company) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", "CURRENT EMPLOYEES".bold())?;
        write!(self.out, "{}", employee_list(company))?;
        writeln!(self.out, "* Scheduled today")?;
        writeln!(self.out, "x Can't be scheduled for a few days")
    }
}

/// Roster with a marker for who is working and who is out
pub fn employee_list(company: &Company) -> String {
    let mut text = String::new();
    for e in company.employees.values() {
        let out_for = company.unavailable_for(e.id);
        let bullet = if company.is_scheduled(e.id) {
            "*"
        } else if out_for > 0 {
            "x"
        } else {
            "-"
        };
        let days_till = if out_for > 0 {
            format!("(Out for {} days)", out_for)
        } else {
            String::new()
        };
        text.push_str(&format!("\t{} {:<30}{}\n", bullet, e.full_name(), days_till));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use workplace_sim::workplace::CompanyParams;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse(""), Command::Continue);
        assert_eq!(Command::parse("  "), Command::Continue);
        assert_eq!(Command::parse("T Hank"), Command::Talk("Hank".to_string()));
        assert_eq!(Command::parse("debug Jack Cole"), Command::Debug("Jack Cole".to_string()));
        assert_eq!(Command::parse("l"), Command::Listen);
        assert_eq!(Command::parse("Hiring"), Command::Hiring);
        assert_eq!(Command::parse("e"), Command::Employees);
        assert_eq!(Command::parse("talk"), Command::Invalid);
        assert_eq!(Command::parse("listen closely"), Command::Invalid);
        assert_eq!(Command::parse("dance"), Command::Invalid);
    }

    #[test]
    fn test_session_ends_with_input() {
        let mut sim = WorkplaceSim::new(CompanyParams::default(), 3).unwrap();
        let input = b"e\nl\n\n".as_slice();
        let mut out = Vec::new();
        Session::new(input, &mut out).run(&mut sim).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("Scheduled today:"));
        assert!(text.contains("CURRENT EMPLOYEES"));
        assert_eq!(sim.company.history.len(), 1);
    }

    #[test]
    fn test_employee_list_marks_schedule() {
        let mut sim = WorkplaceSim::new(CompanyParams::default(), 4).unwrap();
        sim.open_day();
        let list = employee_list(&sim.company);
        assert_eq!(list.lines().count(), sim.company.headcount());
        assert_eq!(
            list.lines().filter(|l| l.trim_start().starts_with('*')).count(),
            sim.company.scheduled_today.len()
        );
    }
}
