use crate::model::record::Decade;

/// Overview prose for one decade.
pub fn decade_overview(decade: Decade) -> &'static str {
    match decade {
        Decade::Forties => {
            "The 1940s marked the beginning of Pune's modern architectural journey. \
             Influences from the British colonial era and the gradual introduction of new \
             building materials began shaping the city's structural landscape. Early public \
             buildings, educational institutions, and civic centers showcased a blend of \
             Victorian and vernacular styles."
        }
        Decade::Fifties => {
            "In the 1950s, Pune witnessed the steady rise of modernist architecture. \
             Traditional aesthetics started merging with new materials like reinforced \
             concrete and steel. Key municipal projects and residential complexes emerged, \
             reflecting India's post-independence optimism and aspirations for progress."
        }
        Decade::Sixties => {
            "The 1960s brought significant urban development to Pune. Architecture began \
             emphasizing functionality, clean lines, and open spaces. Government complexes, \
             research institutes, and expanding educational campuses dominated the cityscape. \
             The decade also saw the first hints of zoning and city planning measures."
        }
        Decade::Seventies => {
            "During the 1970s, Pune's architecture started incorporating more sustainable \
             practices. Local materials and climate-responsive designs gained importance, \
             partially influenced by global energy crises. Housing cooperatives flourished, \
             while local architects experimented with environmentally-conscious layouts."
        }
        Decade::EightiesNineties => {
            "The late 20th century witnessed an eclectic fusion of international design \
             philosophies with indigenous traditions. Corporate buildings, IT parks (emerging \
             in the 1990s), and more ambitious civic projects changed the city's skyline. \
             Postmodern elements, glass facades, and innovative design principles began \
             coexisting with the city's cultural heritage."
        }
    }
}

/// Three "key highlights" bullets for one decade.
pub fn decade_highlights(decade: Decade) -> &'static [&'static str] {
    match decade {
        Decade::Forties => &[
            "Transitioning from colonial influences to vernacular adaptations",
            "Introduction of reinforced concrete and newer building materials",
            "Foundational public and educational institutions",
        ],
        Decade::Fifties => &[
            "Rising modernist principles influencing cityscapes",
            "Blending traditional aesthetics with new construction techniques",
            "Emergence of key municipal and residential projects",
        ],
        Decade::Sixties => &[
            "Strong focus on functionality and open spaces",
            "Expansion of government complexes and research institutes",
            "Initial steps towards zoning and planned urban growth",
        ],
        Decade::Seventies => &[
            "Growing emphasis on sustainable and climate-responsive designs",
            "Increased use of local materials and eco-friendly practices",
            "Housing cooperatives and community-centric developments",
        ],
        Decade::EightiesNineties => &[
            "Eclectic fusion of international and indigenous design philosophies",
            "Introduction of IT parks and corporate architecture",
            "Postmodern elements and innovative building façades",
        ],
    }
}
