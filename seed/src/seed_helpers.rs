// Static word lists the sample listings are assembled from.

pub const IMAGE_URL: &str = "https://source.unsplash.com/collection/483251";

pub const DESCRIPTION: &str = "Lorem ipsum dolor, sit amet consectetur adipisicing elit. \
Veritatis, ipsam quas aperiam aliquid dolor exercitationem, sed harum vero facilis quae \
magnam quidem tenetur aspernatur! Quaerat laudantium autem nostrum. Consectetur, officia!";

pub const DESCRIPTORS: &[&str] = &[
    "Forest", "Ancient", "Petrified", "Roaring", "Cascade", "Tumbling", "Silent", "Redwood",
    "Bullfrog", "Maple", "Misty", "Elk", "Grizzly", "Ocean", "Sea", "Sky", "Dusty", "Diamond",
];

pub const PLACES: &[&str] = &[
    "Flats", "Village", "Canyon", "Pond", "Lodge", "Inn", "Ghost Town", "Retreat", "Resort",
    "Backcountry", "River", "Creek", "Creekside", "Bay", "Spring", "Bayshore", "Sands", "Cliffs",
    "Hollow",
];

/// (city, state)
pub const CITIES: &[(&str, &str)] = &[
    ("New York", "New York"),
    ("Los Angeles", "California"),
    ("Chicago", "Illinois"),
    ("Houston", "Texas"),
    ("Philadelphia", "Pennsylvania"),
    ("Phoenix", "Arizona"),
    ("San Antonio", "Texas"),
    ("San Diego", "California"),
    ("Dallas", "Texas"),
    ("San Jose", "California"),
    ("Austin", "Texas"),
    ("Indianapolis", "Indiana"),
    ("Jacksonville", "Florida"),
    ("San Francisco", "California"),
    ("Columbus", "Ohio"),
    ("Charlotte", "North Carolina"),
    ("Fort Worth", "Texas"),
    ("Detroit", "Michigan"),
    ("El Paso", "Texas"),
    ("Memphis", "Tennessee"),
    ("Seattle", "Washington"),
    ("Denver", "Colorado"),
    ("Washington", "District of Columbia"),
    ("Boston", "Massachusetts"),
    ("Nashville", "Tennessee"),
    ("Baltimore", "Maryland"),
    ("Oklahoma City", "Oklahoma"),
    ("Louisville", "Kentucky"),
    ("Portland", "Oregon"),
    ("Las Vegas", "Nevada"),
    ("Milwaukee", "Wisconsin"),
    ("Albuquerque", "New Mexico"),
    ("Tucson", "Arizona"),
    ("Fresno", "California"),
    ("Sacramento", "California"),
    ("Long Beach", "California"),
    ("Kansas City", "Missouri"),
    ("Mesa", "Arizona"),
    ("Atlanta", "Georgia"),
    ("Miami", "Florida"),
];
