//! Static word tables behind [`super::TableProvider`].
//!
//! Masks use `#` for a digit and `?` for an uppercase letter
//! (see [`super::ids::bothify`]).

use super::Locale;

pub struct LocaleTables {
    pub first_names: &'static [&'static str],
    pub last_names: &'static [&'static str],
    pub company_suffixes: &'static [&'static str],
    pub company_joiner: &'static str,
    pub street_names: &'static [&'static str],
    pub street_suffixes: &'static [&'static str],
    /// Placeholders: `{number}`, `{name}`, `{suffix}`.
    pub street_format: &'static str,
    pub cities: &'static [&'static str],
    pub states: &'static [&'static str],
    pub postcode_formats: &'static [&'static str],
    pub phone_formats: &'static [&'static str],
    pub email_domains: &'static [&'static str],
    pub jobs: &'static [&'static str],
}

pub fn for_locale(locale: Locale) -> &'static LocaleTables {
    match locale {
        Locale::Us => &US,
        Locale::Uk => &UK,
        Locale::De => &DE,
        Locale::Fr => &FR,
    }
}

pub static US: LocaleTables = LocaleTables {
    first_names: &[
        "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
        "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas",
        "Sarah", "Christopher", "Karen", "Daniel", "Nancy", "Matthew", "Lisa",
    ],
    last_names: &[
        "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
        "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas",
        "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White",
    ],
    company_suffixes: &["Inc", "LLC", "Group", "PLC", "Ltd", "and Sons"],
    company_joiner: "and",
    street_names: &[
        "Oak", "Maple", "Cedar", "Pine", "Elm", "Washington", "Lake", "Hill", "Park", "Lincoln",
        "Jefferson", "Sunset", "Ridge", "Willow",
    ],
    street_suffixes: &["Street", "Avenue", "Road", "Lane", "Drive", "Court", "Boulevard", "Way"],
    street_format: "{number} {name} {suffix}",
    cities: &[
        "Springfield", "Riverside", "Franklin", "Greenville", "Bristol", "Clinton", "Fairview",
        "Salem", "Madison", "Georgetown", "Arlington", "Ashland", "Dover", "Oxford",
    ],
    states: &[
        "California", "Texas", "Florida", "New York", "Pennsylvania", "Illinois", "Ohio",
        "Georgia", "North Carolina", "Michigan", "New Jersey", "Virginia", "Washington",
        "Arizona",
    ],
    postcode_formats: &["#####", "#####-####"],
    phone_formats: &["(###) ###-####", "###-###-####", "+1-###-###-####", "###.###.####"],
    email_domains: &["example.com", "example.org", "example.net", "mail.example.com"],
    jobs: &[
        "Accountant", "Software Engineer", "Registered Nurse", "Teacher", "Sales Manager",
        "Electrician", "Financial Analyst", "Pharmacist", "Architect", "Attorney",
        "Marketing Specialist", "Civil Engineer", "Graphic Designer", "Chef",
    ],
};

pub static UK: LocaleTables = LocaleTables {
    first_names: &[
        "Oliver", "Amelia", "George", "Isla", "Harry", "Ava", "Jack", "Emily", "Charlie",
        "Sophie", "Thomas", "Grace", "Oscar", "Lily", "William", "Freya", "James", "Evie",
        "Henry", "Poppy",
    ],
    last_names: &[
        "Smith", "Jones", "Taylor", "Brown", "Williams", "Wilson", "Johnson", "Davies",
        "Robinson", "Wright", "Thompson", "Evans", "Walker", "White", "Roberts", "Green",
        "Hall", "Wood", "Jackson", "Clarke",
    ],
    company_suffixes: &["Ltd", "PLC", "LLP", "Group", "and Co"],
    company_joiner: "and",
    street_names: &[
        "Church", "High", "Station", "Victoria", "Green", "Manor", "Park", "Queens", "Kings",
        "Mill", "Windsor", "Albert",
    ],
    street_suffixes: &["Street", "Road", "Lane", "Close", "Gardens", "Crescent", "Way", "Place"],
    street_format: "{number} {name} {suffix}",
    cities: &[
        "London", "Manchester", "Birmingham", "Leeds", "Glasgow", "Bristol", "Liverpool",
        "Sheffield", "Edinburgh", "Cardiff", "Leicester", "Nottingham", "Oxford", "York",
    ],
    states: &[
        "Greater London", "West Midlands", "Greater Manchester", "West Yorkshire", "Kent",
        "Essex", "Merseyside", "Lancashire", "Surrey", "Hampshire", "Devon", "Norfolk",
    ],
    postcode_formats: &["?# #??", "?## #??", "??# #??", "??## #??"],
    phone_formats: &["+44(0)#### ######", "0#### ######", "0### ### ####", "+44 ## #### ####"],
    email_domains: &["example.co.uk", "example.org.uk", "example.com"],
    jobs: &[
        "Solicitor", "Chartered Accountant", "Nurse", "Secondary School Teacher",
        "Quantity Surveyor", "Civil Servant", "Software Developer", "Pharmacist",
        "Estate Agent", "Barrister", "Electrician", "Police Officer",
    ],
};

pub static DE: LocaleTables = LocaleTables {
    first_names: &[
        "Lukas", "Anna", "Leon", "Marie", "Finn", "Sophie", "Jonas", "Emma", "Paul", "Lena",
        "Felix", "Hannah", "Maximilian", "Laura", "Jan", "Julia", "Tim", "Katharina",
    ],
    last_names: &[
        "Müller", "Schmidt", "Schneider", "Fischer", "Weber", "Meyer", "Wagner", "Becker",
        "Schulz", "Hoffmann", "Schäfer", "Koch", "Bauer", "Richter", "Klein", "Wolf",
        "Schröder", "Neumann",
    ],
    company_suffixes: &["GmbH", "AG", "GmbH & Co. KG", "KG", "OHG", "e.G."],
    company_joiner: "&",
    street_names: &[
        "Haupt", "Schul", "Garten", "Bahnhof", "Dorf", "Berg", "Kirch", "Wald", "Linden",
        "Birken", "Ring", "Mühlen",
    ],
    street_suffixes: &["straße", "weg", "allee", "gasse", "platz"],
    street_format: "{name}{suffix} {number}",
    cities: &[
        "Berlin", "Hamburg", "München", "Köln", "Frankfurt am Main", "Stuttgart", "Düsseldorf",
        "Leipzig", "Dortmund", "Essen", "Bremen", "Dresden", "Hannover", "Nürnberg",
    ],
    states: &[
        "Bayern", "Berlin", "Hamburg", "Hessen", "Sachsen", "Niedersachsen",
        "Nordrhein-Westfalen", "Baden-Württemberg", "Brandenburg", "Thüringen", "Bremen",
        "Schleswig-Holstein",
    ],
    postcode_formats: &["#####"],
    phone_formats: &["+49(0)### #######", "0### ########", "+49 ## ########", "0#### ######"],
    email_domains: &["example.de", "beispiel.de", "example.com"],
    jobs: &[
        "Steuerberater", "Ingenieur", "Krankenpfleger", "Lehrerin", "Bankkaufmann",
        "Elektriker", "Softwareentwickler", "Apotheker", "Architektin", "Rechtsanwalt",
        "Mechatroniker", "Verwaltungsfachangestellte",
    ],
};

pub static FR: LocaleTables = LocaleTables {
    first_names: &[
        "Gabriel", "Louise", "Raphaël", "Emma", "Léo", "Jade", "Louis", "Alice", "Hugo",
        "Chloé", "Jules", "Léa", "Arthur", "Manon", "Lucas", "Camille", "Adam", "Inès",
    ],
    last_names: &[
        "Martin", "Bernard", "Dubois", "Thomas", "Robert", "Richard", "Petit", "Durand",
        "Leroy", "Moreau", "Simon", "Laurent", "Lefebvre", "Michel", "Garcia", "David",
        "Bertrand", "Roux",
    ],
    company_suffixes: &["SA", "SARL", "SAS", "SNC", "et Fils"],
    company_joiner: "et",
    street_names: &[
        "de la Paix", "Victor Hugo", "de la République", "Jean Jaurès", "du Général de Gaulle",
        "des Lilas", "Pasteur", "de la Gare", "du Moulin", "Voltaire", "des Écoles",
        "Saint-Michel",
    ],
    street_suffixes: &["rue", "avenue", "boulevard", "place", "chemin", "impasse"],
    street_format: "{number} {suffix} {name}",
    cities: &[
        "Paris", "Marseille", "Lyon", "Toulouse", "Nice", "Nantes", "Strasbourg", "Montpellier",
        "Bordeaux", "Lille", "Rennes", "Reims", "Toulon", "Grenoble",
    ],
    states: &[
        "Île-de-France", "Provence-Alpes-Côte d'Azur", "Auvergne-Rhône-Alpes", "Occitanie",
        "Nouvelle-Aquitaine", "Hauts-de-France", "Grand Est", "Bretagne", "Normandie",
        "Pays de la Loire", "Bourgogne-Franche-Comté", "Centre-Val de Loire",
    ],
    postcode_formats: &["#####"],
    phone_formats: &["0# ## ## ## ##", "+33 # ## ## ## ##", "+33 (0)# ## ## ## ##"],
    email_domains: &["example.fr", "exemple.fr", "example.com"],
    jobs: &[
        "Comptable", "Ingénieur", "Infirmière", "Professeur des écoles", "Notaire",
        "Pharmacien", "Architecte", "Avocat", "Développeur", "Boulanger", "Électricien",
        "Chargé de clientèle",
    ],
};
