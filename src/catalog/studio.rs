use crate::catalog::Record;
use crate::i18n::{Localized, Text};

/// A guiding value of the studio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueItem {
    pub slug: &'static str,
    pub title: Text,
    pub description: Text,
}

impl Record for ValueItem {
    const KIND: &'static str = "value";

    fn key(&self) -> &str {
        self.slug
    }

    fn texts(&self) -> Vec<(&'static str, Text)> {
        vec![("title", self.title), ("description", self.description)]
    }
}

/// A member of the studio team. Names are not translated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub slug: &'static str,
    pub name: &'static str,
    pub role: Text,
    pub photo: &'static str,
}

impl Record for TeamMember {
    const KIND: &'static str = "team member";

    fn key(&self) -> &str {
        self.slug
    }

    fn texts(&self) -> Vec<(&'static str, Text)> {
        vec![("role", self.role)]
    }
}

/// A headline figure shown on the projects page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub number: &'static str,
    pub label: Text,
}

pub const VALUES: &[ValueItem] = &[
    ValueItem {
        slug: "integridade",
        title: Localized::new("Integridade", "Integrity"),
        description: Localized::new(
            "Projetos honestos que respeitam contexto, orçamento e expectativas.",
            "Honest projects that respect context, budget and expectations.",
        ),
    },
    ValueItem {
        slug: "inovacao",
        title: Localized::new("Inovação", "Innovation"),
        description: Localized::new(
            "Busca constante por soluções criativas e materiais contemporâneos.",
            "Constant search for creative solutions and contemporary materials.",
        ),
    },
    ValueItem {
        slug: "sustentabilidade",
        title: Localized::new("Sustentabilidade", "Sustainability"),
        description: Localized::new(
            "Compromisso com a responsabilidade ambiental em cada decisão.",
            "Commitment to environmental responsibility in every decision.",
        ),
    },
    ValueItem {
        slug: "colaboracao",
        title: Localized::new("Colaboração", "Collaboration"),
        description: Localized::new(
            "Processo participativo onde o cliente é parte essencial.",
            "Participatory process where the client is an essential part.",
        ),
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        slug: "ana-clara-vasconcelos",
        name: "Ana Clara Vasconcelos",
        role: Localized::new("Diretora de Arquitetura", "Architecture Director"),
        photo: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?w=600&q=80",
    },
    TeamMember {
        slug: "rafael-montenegro",
        name: "Rafael Montenegro",
        role: Localized::new("Diretor de Engenharia", "Engineering Director"),
        photo: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=600&q=80",
    },
    TeamMember {
        slug: "beatriz-nakamura",
        name: "Beatriz Nakamura",
        role: Localized::new("Líder de Projetos", "Project Lead"),
        photo: "https://images.unsplash.com/photo-1580489944761-15a19d654956?w=600&q=80",
    },
    TeamMember {
        slug: "lucas-ferraro",
        name: "Lucas Ferraro",
        role: Localized::new("Arquiteto Sênior", "Senior Architect"),
        photo: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=600&q=80",
    },
];

pub const AWARDS: &[&str] = &["IAB-SP 2023", "Bienal 2022", "AsBEA 2021", "Archdaily 2020"];

pub const STATS: &[Stat] = &[
    Stat {
        number: "47",
        label: Localized::new("Projetos Realizados", "Completed Projects"),
    },
    Stat {
        number: "12",
        label: Localized::new("Anos de Experiência", "Years of Experience"),
    },
    Stat {
        number: "8",
        label: Localized::new("Prêmios", "Awards"),
    },
    Stat {
        number: "32",
        label: Localized::new("Cidades", "Cities"),
    },
];
