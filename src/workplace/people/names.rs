//! Name tables for generated people

use rand::Rng;

/// Word banks for first names, last names and nicknames
#[derive(Clone, Debug)]
pub struct NameBank {
    neutral_first: Vec<&'static str>,
    feminine_first: Vec<&'static str>,
    masculine_first: Vec<&'static str>,
    surnames: Vec<&'static str>,
    nicknames: Vec<&'static str>,
}

impl Default for NameBank {
    fn default() -> Self {
        let neutral_first = vec![
            "Ace", "Axel", "Babe", "Bigs", "Biscuit", "Bloomer", "Calamity", "Cassidy",
            "CJ", "Dakota", "Danny", "Dig", "Doc", "Dogwood", "Dusty", "Greenie",
            "Jasper", "Jesse", "Kid", "Lucky", "Mack", "Maverick", "Mick", "Pennyless",
            "Pig-iron", "PJ", "Rev", "RJ", "Sasquatch", "Sawhorse", "Slippers", "Smokey",
            "Squid", "Sundance", "Sunny", "Tex", "Toad", "Turpentine", "Virgil", "Wally",
            "Yorkshire", "Zane", "Zero",
        ];

        let mut nicknames = vec![
            "Sarge", "Trixie", "Teddy", "Fanny", "Smiley", "Squid", "Yank", "Wendy",
            "Pops", "Hopper", "Willy",
        ];
        for name in neutral_first.iter().copied() {
            if !nicknames.contains(&name) {
                nicknames.push(name);
            }
        }

        NameBank {
            neutral_first,
            feminine_first: vec![
                "Abigail", "Ada", "Agnes", "Alice", "Annie", "Beau", "Bessie", "Betty",
                "Birdie", "Blanche", "Bonnie", "Belle", "Cheyenne", "Charlotte", "Cleo", "Clara",
                "Clementine", "Daisy", "Dolly", "Dusty", "Eleanor", "Eliza", "Ermengarde", "Etta",
                "Fanny", "Gillian", "Greta", "Hannah", "Harriet", "Hattie", "Hilde", "Hildegarde",
                "Jesse", "Lillie", "Mabel", "Mae", "Millie", "Minnie", "Nettie", "Nora",
                "Olive", "Pearl", "Sadie", "Sally", "Tess", "Tillie", "Violet", "Willa",
                "Willamina",
            ],
            masculine_first: vec![
                "Amos", "Barny", "Ben", "Bert", "Bill", "Billy", "Buck", "Butch",
                "Clint", "Clyde", "Cornilius", "Earl", "Eleazar", "Eli", "Emmett", "Ezra",
                "Floyd", "Frank", "Fred", "Gus", "Glenn", "Gill", "Hank", "Hezekiah",
                "Ike", "Isaac", "Jack", "Jeb", "Jed", "Jethro", "Jim", "Joe",
                "John", "James", "Jesse", "Obediah", "Otis", "Ringo", "Robert", "Rufus",
                "Silas", "Tex", "Utah", "Wade", "Wes", "William", "Wyatt", "Zeke",
            ],
            surnames: vec![
                "Baker", "Black", "Brown", "Carter", "Clark", "Cole", "Collins", "Cook",
                "Cooper", "Davis", "Diaz", "Evans", "Fisher", "Flores", "Foster", "Garcia",
                "Gonzalez", "Gray", "Green", "Hall", "Harris", "Hernandez", "Hill", "Howard",
                "Hughes", "Jackson", "James", "Jenkins", "Johnson", "Jones", "King", "Lee",
                "Lewis", "Long", "Lopez", "Martin", "Martinez", "Miller", "Mitchell", "Moore",
                "Morris", "Murphy", "Nelson", "Parker", "Perez", "Perry", "Peterson", "Phillips",
                "Powell", "Price", "Ramirez", "Reed", "Reyes", "Reynolds", "Richardson", "Rivera",
                "Roberts", "Robinson", "Rodriguez", "Rogers", "Ross", "Russell", "Sanchez", "Sanders",
                "Scott", "Simmons", "Smith", "Stewart", "Taylor", "Thomas", "Thompson", "Torres",
                "Turner", "Walker", "Ward", "Watson", "White", "Williams", "Wilson", "Wood",
                "Wright", "Young",
            ],
            nicknames,
        }
    }
}

impl NameBank {
    /// Pick a first name matching the presentation traits
    pub fn first_name<R: Rng>(&self, feminine: bool, masculine: bool, rng: &mut R) -> &'static str {
        let table = if feminine {
            &self.feminine_first
        } else if masculine {
            &self.masculine_first
        } else {
            &self.neutral_first
        };
        pick(rng, table)
    }

    pub fn surname<R: Rng>(&self, rng: &mut R) -> &'static str {
        pick(rng, &self.surnames)
    }

    pub fn middle_initial<R: Rng>(&self, rng: &mut R) -> char {
        (b'A' + rng.gen_range(0..26u8)) as char
    }

    /// Generic nickname pool
    pub fn nicknames(&self) -> &[&'static str] {
        &self.nicknames
    }

    /// Nicknames derived from a specific first name
    pub fn name_based_nicknames(&self, first_name: &str) -> &'static [&'static str] {
        match first_name {
            "Hildegarde" => &["Hilde"],
            "Ermengarde" => &["Erma"],
            "Eleazar" => &["Eli"],
            "William" => &["Bill", "Billy", "Will", "Willy"],
            "James" => &["Jim"],
            "Robert" => &["Bob", "Bobby"],
            "Willamina" => &["Willa", "Willie", "Mena"],
            "Sundance" => &["Sunny"],
            "Clementine" => &["Cleo", "Tina"],
            "Cornilius" => &["Nellie"],
            "Gillian" => &["Jill", "Gilly"],
            "Turpentine" => &["Turp", "Tina", "Tinny"],
            "Virgil" => &["Viggy", "Vicky"],
            "Eleanor" => &["Ellie", "Nellie"],
            "Calamity" => &["Callie"],
            "Sasquatch" => &["Sassy", "Sass"],
            _ => &[],
        }
    }
}

/// Pick a random entry from a non-empty table
pub fn pick<'a, R: Rng>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

/// Pick a random relative for call-out and quitting excuses
pub fn random_relative<R: Rng>(rng: &mut R) -> &'static str {
    pick(rng, &["son", "daughter", "mother", "father", "grandson", "granddaughter"])
}
