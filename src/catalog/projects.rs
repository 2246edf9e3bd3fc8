use crate::catalog::Record;
use crate::i18n::{Localized, Text};

/// Project category used by the listing filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Residencial,
    Comercial,
    Institucional,
    Interiores,
    Urbanismo,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Residencial,
        Category::Comercial,
        Category::Institucional,
        Category::Interiores,
        Category::Urbanismo,
    ];

    /// Stable identifier used in `?category=` queries.
    pub fn id(&self) -> &'static str {
        match self {
            Category::Residencial => "residencial",
            Category::Comercial => "comercial",
            Category::Institucional => "institucional",
            Category::Interiores => "interiores",
            Category::Urbanismo => "urbanismo",
        }
    }

    pub fn label(&self) -> Text {
        match self {
            Category::Residencial => Localized::new("Residencial", "Residential"),
            Category::Comercial => Localized::new("Comercial", "Commercial"),
            Category::Institucional => Localized::new("Institucional", "Institutional"),
            Category::Interiores => Localized::new("Interiores", "Interiors"),
            Category::Urbanismo => Localized::new("Urbanismo", "Urban"),
        }
    }
}

/// A built project shown in the portfolio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub slug: &'static str,
    pub title: Text,
    pub category: Category,
    pub year: u16,
    pub location: &'static str,
    pub area: &'static str,
    pub client: Text,
    pub description: Text,
    pub hero_image: &'static str,
    pub gallery: &'static [&'static str],
}

impl Project {
    /// Gallery image at `index`, clamping out-of-range indices to the first.
    ///
    /// Returns the effective index with the image, or `None` for an empty
    /// gallery.
    pub fn gallery_image(&self, index: usize) -> Option<(usize, &'static str)> {
        let index = if index < self.gallery.len() { index } else { 0 };
        self.gallery.get(index).map(|image| (index, *image))
    }
}

impl Record for Project {
    const KIND: &'static str = "project";

    fn key(&self) -> &str {
        self.slug
    }

    fn texts(&self) -> Vec<(&'static str, Text)> {
        vec![
            ("title", self.title),
            ("client", self.client),
            ("description", self.description),
        ]
    }
}

/// Next gallery index, wrapping from the last image to the first.
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if current + 1 >= len {
        0
    } else {
        current + 1
    }
}

/// Previous gallery index, wrapping from the first image to the last.
pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if current == 0 || current >= len {
        len - 1
    } else {
        current - 1
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        slug: "casa-mirante",
        title: Localized::new("Casa Mirante", "Viewpoint House"),
        category: Category::Residencial,
        year: 2024,
        location: "Campos do Jordão, SP",
        area: "480m²",
        client: Localized::new("Privado", "Private"),
        description: Localized::new(
            "Uma residência que se abre para a paisagem montanhosa, criando uma simbiose entre arquitetura e natureza. O projeto explora a relação entre interior e exterior através de grandes panos de vidro e terraços suspensos.",
            "A residence that opens to the mountain landscape, creating a symbiosis between architecture and nature. The project explores the relationship between interior and exterior through large glass panels and suspended terraces.",
        ),
        hero_image: "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?w=1920&q=80",
        gallery: &[
            "https://images.unsplash.com/photo-1600585154526-990dced4db0d?w=1200&q=80",
            "https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3?w=1200&q=80",
            "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?w=1200&q=80",
            "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?w=1200&q=80",
        ],
    },
    Project {
        slug: "edificio-horizonte",
        title: Localized::new("Edifício Horizonte", "Horizon Building"),
        category: Category::Comercial,
        year: 2023,
        location: "São Paulo, SP",
        area: "12.000m²",
        client: Localized::new("Horizonte Incorporadora", "Horizonte Incorporadora"),
        description: Localized::new(
            "Um marco na paisagem urbana de São Paulo. O Edifício Horizonte redefine o conceito de espaço corporativo com fachadas de vidro de alta performance, jardins verticais e áreas de convivência.",
            "A landmark in São Paulo's urban landscape. Horizon Building redefines corporate space with high-performance glass façades, vertical gardens, and shared areas.",
        ),
        hero_image: "https://images.unsplash.com/photo-1486325212027-8081e485255e?w=1920&q=80",
        gallery: &[
            "https://images.unsplash.com/photo-1497366216548-37526070297c?w=1200&q=80",
            "https://images.unsplash.com/photo-1497366811353-6870744d04b2?w=1200&q=80",
            "https://images.unsplash.com/photo-1497215842964-222b430dc094?w=1200&q=80",
            "https://images.unsplash.com/photo-1504384308090-c894fdcc538d?w=1200&q=80",
        ],
    },
    Project {
        slug: "centro-cultural-luz",
        title: Localized::new("Centro Cultural Luz", "Light Cultural Center"),
        category: Category::Institucional,
        year: 2023,
        location: "São Paulo, SP",
        area: "8.500m²",
        client: Localized::new("Prefeitura Municipal", "City Hall"),
        description: Localized::new(
            "Equipamento cultural voltado à integração urbana, o Centro Cultural Luz conecta arte, educação e espaço público por meio de uma arquitetura aberta e permeável.",
            "A cultural facility focused on urban integration, the Light Cultural Center connects art, education, and public space through open and permeable architecture.",
        ),
        hero_image: "https://images.unsplash.com/photo-1545558014-8692077e9b5c?w=1920&q=80",
        gallery: &[
            "https://images.unsplash.com/photo-1545558014-8692077e9b5c?w=1200&q=80",
            "https://images.unsplash.com/photo-1501183638710-841dd1904471?w=1200&q=80",
            "https://images.unsplash.com/photo-1491553895911-0055eca6402d?w=1200&q=80",
            "https://images.unsplash.com/photo-1529429617124-95b109e86bb8?w=1200&q=80",
        ],
    },
    Project {
        slug: "loft-jardins",
        title: Localized::new("Loft Jardins", "Jardins Loft"),
        category: Category::Interiores,
        year: 2024,
        location: "São Paulo, SP",
        area: "180m²",
        client: Localized::new("Privado", "Private"),
        description: Localized::new(
            "Projeto de interiores que valoriza materiais naturais, iluminação indireta e integração de ambientes em um loft contemporâneo no bairro Jardins.",
            "An interior design project that highlights natural materials, indirect lighting, and integrated spaces in a contemporary loft located in Jardins.",
        ),
        hero_image: "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?w=1920&q=80",
        gallery: &[
            "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?w=1200&q=80",
            "https://images.unsplash.com/photo-1600585153490-76fb20a32601?w=1200&q=80",
            "https://images.unsplash.com/photo-1615873968403-89e068629265?w=1200&q=80",
            "https://images.unsplash.com/photo-1600210492486-724fe5c67fb0?w=1200&q=80",
        ],
    },
    Project {
        slug: "praca-das-aguas",
        title: Localized::new("Praça das Águas", "Waters Square"),
        category: Category::Urbanismo,
        year: 2022,
        location: "Campinas, SP",
        area: "25.000m²",
        client: Localized::new("Município de Campinas", "City of Campinas"),
        description: Localized::new(
            "Projeto urbano que requalifica o espaço público por meio de espelhos d'água, áreas verdes e percursos acessíveis, promovendo convivência e lazer.",
            "An urban project that revitalizes public space through water features, green areas, and accessible pathways, encouraging leisure and social interaction.",
        ),
        hero_image: "https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3?w=1920&q=80",
        gallery: &[
            "https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3?w=1200&q=80",
            "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?w=1200&q=80",
            "https://images.unsplash.com/photo-1501785888041-af3ef285b470?w=1200&q=80",
            "https://images.unsplash.com/photo-1496560736447-7b1a7f7a7f0b?w=1200&q=80",
        ],
    },
    Project {
        slug: "residencia-serra",
        title: Localized::new("Residência Serra", "Serra Residence"),
        category: Category::Residencial,
        year: 2023,
        location: "Gramado, RS",
        area: "620m²",
        client: Localized::new("Privado", "Private"),
        description: Localized::new(
            "Residência unifamiliar implantada em terreno inclinado, com forte relação com a paisagem serrana e soluções arquitetônicas voltadas ao conforto térmico.",
            "A single-family residence set on a sloped site, strongly connected to the mountainous landscape and designed with thermal comfort in mind.",
        ),
        hero_image: "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?w=1920&q=80",
        gallery: &[
            "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?w=1200&q=80",
            "https://images.unsplash.com/photo-1600585154014-0a48a1e3b1d5?w=1200&q=80",
            "https://images.unsplash.com/photo-1560448070-c2f1b9b1b0c3?w=1200&q=80",
            "https://images.unsplash.com/photo-1600585153277-15be3dff2a1c?w=1200&q=80",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    // ==================== Category Tests ====================

    #[test]
    fn test_category_ids_are_lowercase_labels() {
        for category in Category::ALL {
            assert_eq!(category.id(), category.label().pt.to_lowercase());
        }
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Urbanismo.label().at(Locale::En), "Urban");
        assert_eq!(Category::Interiores.label().at(Locale::Pt), "Interiores");
    }

    // ==================== Gallery Tests ====================

    #[test]
    fn test_next_index_wraps() {
        assert_eq!(next_index(0, 4), 1);
        assert_eq!(next_index(3, 4), 0);
    }

    #[test]
    fn test_prev_index_wraps() {
        assert_eq!(prev_index(2, 4), 1);
        assert_eq!(prev_index(0, 4), 3);
    }

    #[test]
    fn test_single_image_gallery_stays_put() {
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(prev_index(0, 1), 0);
    }

    #[test]
    fn test_empty_gallery_indices() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }

    #[test]
    fn test_gallery_image_clamps_out_of_range() {
        let project = &PROJECTS[0];
        assert_eq!(project.gallery_image(2).map(|(i, _)| i), Some(2));
        assert_eq!(project.gallery_image(99).map(|(i, _)| i), Some(0));
    }

    #[test]
    fn test_gallery_image_empty() {
        let mut project = PROJECTS[0].clone();
        project.gallery = &[];
        assert_eq!(project.gallery_image(0), None);
    }

    // ==================== Data Tests ====================

    #[test]
    fn test_every_project_has_gallery() {
        for project in PROJECTS {
            assert!(!project.gallery.is_empty(), "{} has no gallery", project.slug);
        }
    }

    #[test]
    fn test_record_key_is_slug() {
        assert_eq!(PROJECTS[1].key(), "edificio-horizonte");
    }
}
