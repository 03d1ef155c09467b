//! Copy for the service detail pages, keyed by URL slug

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceEntry {
    pub slug: &'static str,
    pub title: &'static str,
    pub quote: &'static str,
    pub description: &'static str,
    pub points: &'static [&'static str],
}

const SERVICES: &[ServiceEntry] = &[
    ServiceEntry {
        slug: "film-production",
        title: "Film Production",
        quote: "\"Filmmaking is a chance to live many lifetimes.\" - Robert Altman",
        description: "Who says films are just an escape? We see them as a way to live many \
                      lives — to feel, to explore, and to tell stories that stay. With each \
                      film, we carry new memories and new reasons to keep creating.",
        points: &[
            "Documentaries",
            "Corporate Videos",
            "2D Animation Videos",
            "3D Animation Videos",
        ],
    },
    ServiceEntry {
        slug: "branding",
        title: "Branding",
        quote: "\"A brand is a voice, and a product is a souvenir.\" - Lisa Gansky",
        description: "We help brands find their voice through visual systems, strategy and \
                      craft. We make brand stories that feel authentic and last.",
        points: &["Identity", "Campaigns", "Visual Strategy", "Content"],
    },
    ServiceEntry {
        slug: "art-curation",
        title: "Art Curation",
        quote: "\"V take art where it belongs, to the people.\" - Vernita Verma",
        description: "We design exhibitions and experiences that connect with audiences — \
                      blending narrative with form, context with care.",
        points: &["Exhibitions", "Installations", "Catalogues"],
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceCatalog;

impl ServiceCatalog {
    pub fn all(&self) -> &'static [ServiceEntry] {
        SERVICES
    }

    /// `None` means the detail view should show "Service Not Found"
    pub fn find(&self, slug: &str) -> Option<&'static ServiceEntry> {
        let slug = slug.trim().trim_matches('/');
        SERVICES.iter().find(|s| s.slug == slug)
    }

    pub fn detail_path(entry: &ServiceEntry) -> String {
        format!("/services/{}", entry.slug)
    }
}
