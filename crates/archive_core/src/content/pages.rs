//! Home, About and sidebar copy.

pub const SIDEBAR_TITLE: &str = "Explore Pune's Past";
pub const SIDEBAR_INTRO: &str = "Navigate through six decades of architectural transformation:";
pub const SIDEBAR_SELECT_LABEL: &str = "Select a Decade or Section";
pub const SIDEBAR_FOOTER: &str =
    "© 2024 Pune Architectural Archive\n*Preserving the Past, Inspiring the Future*";

pub const HOME_TITLE: &str = "Pune's Architectural Evolution (1940s - 1990s)";
pub const HOME_LOGO_PATH: &str = "assets/logo.png";
pub const HOME_LOGO_CAPTION: &str = "Pune Architectural Archive";
pub const HOME_PARAGRAPHS: &[&str] = &[
    "Welcome to the **Pune Architectural Archive**, an interactive journey through the city's \
     evolving built environment from the 1940s to the 1990s.",
    "Over these decades, Pune transformed from a modest educational hub into a burgeoning \
     metropolis. Each era introduced fresh design philosophies, construction materials, and \
     planning principles, mirroring broader social, economic, and cultural shifts.",
];
pub const HOME_FEATURES: &[&str] = &[
    "**Decade-by-Decade Exploration:** Traverse through time and witness changing \
     architectural styles and urban planning milestones.",
    "**Immersive Visual Galleries:** Explore landmark buildings, from public institutions and \
     educational campuses to residential complexes and commercial hubs.",
    "**Interactive 3D Map:** Pinpoint the geographic distribution of Pune's architectural gems \
     using an advanced map visualization tool.",
];
pub const HOME_HINT: &str =
    "Use the sidebar to start exploring different decades or learn more in the 'About' section.";

pub const ABOUT_TITLE: &str = "About This Project";
pub const ABOUT_INTRO: &str = "This digital archive is a tribute to Pune's rich architectural \
     heritage and its dynamic transformation over the mid-20th century. By compiling images, \
     archival research, and expert insights, we hope to provide a valuable educational resource \
     and a source of inspiration.";
pub const ABOUT_GOALS: &[&str] = &[
    "Construct a comprehensive digital repository of Pune's historical buildings.",
    "Highlight the interplay between architectural trends, socio-cultural influences, and \
     evolving urban policies.",
    "Offer an interactive, user-friendly platform that encourages exploration and deeper \
     appreciation.",
];
pub const ABOUT_METHODOLOGY: &[&str] = &[
    "In-depth review of municipal archives, architectural journals, and historical documentation.",
    "Contributions from local historians, architects, and urban planners.",
    "Integration of geospatial data for mapping and visualization.",
];
pub const ABOUT_CONTRIBUTORS: &[&str] =
    &["Kaustubh Devang – Research, Content Development, Web Implementation"];
pub const ABOUT_CONTACT: &str = "kaustubhdevang16@gmail.com";

pub const GALLERY_INTRO: &str = "Explore a selection of buildings and landmarks that exemplify \
     this decade's architectural style.";
pub const PROJECTS_INTRO: &str = "Delve deeper into notable buildings of this decade. Open a \
     project to learn about its background, architectural significance, and the visionary \
     minds behind it.";
pub const MAP_INTRO: &str = "Pinpoint the geographical spread of these architectural projects. \
     Zoom, pan, and tilt the map for a detailed spatial understanding.";
pub const EMPTY_SECTION_NOTICE: &str = "No records are available for this decade yet.";
