use crate::catalog::Record;
use crate::i18n::{Localized, Text, TextList};

/// One stage of the studio's design process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessStep {
    /// Two-digit ordinal, also the catalog key ("01".."04")
    pub number: &'static str,
    pub title: Text,
    pub subtitle: Text,
    pub description: Text,
    pub image: &'static str,
    pub details: TextList,
}

impl Record for ProcessStep {
    const KIND: &'static str = "process step";

    fn key(&self) -> &str {
        self.number
    }

    fn texts(&self) -> Vec<(&'static str, Text)> {
        vec![
            ("title", self.title),
            ("subtitle", self.subtitle),
            ("description", self.description),
        ]
    }

    fn lists(&self) -> Vec<(&'static str, TextList)> {
        vec![("details", self.details)]
    }
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        number: "01",
        title: Localized::new("Escuta", "Listen"),
        subtitle: Localized::new("Imersão total no seu universo", "Total immersion in your universe"),
        description: Localized::new(
            "Começamos ouvindo. Entendemos suas necessidades, sonhos, restrições e o contexto onde o projeto se insere. Cada conversa é uma descoberta.",
            "We start by listening. We understand your needs, dreams, constraints and the context where the project fits. Each conversation is a discovery.",
        ),
        image: "https://images.unsplash.com/photo-1600585154526-990dced4db0d?w=1200&q=80",
        details: Localized {
            pt: &[
                "Análise do terreno",
                "Estudo de viabilidade",
                "Briefing detalhado",
                "Pesquisa de referências",
            ],
            en: &[
                "Site analysis",
                "Feasibility study",
                "Detailed briefing",
                "Reference research",
            ],
        },
    },
    ProcessStep {
        number: "02",
        title: Localized::new("Conceito", "Concept"),
        subtitle: Localized::new("A ideia que tudo conecta", "The idea that connects everything"),
        description: Localized::new(
            "Da escuta nasce o conceito. Uma ideia-força que guiará todas as decisões projetuais. É a essência traduzida em espaço.",
            "From listening comes the concept. A core idea that will guide all design decisions. It's the essence translated into space.",
        ),
        image: "https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3?w=1200&q=80",
        details: Localized {
            pt: &[
                "Partido arquitetônico",
                "Estudos volumétricos",
                "Maquetes conceituais",
                "Apresentação da ideia",
            ],
            en: &[
                "Architectural approach",
                "Volumetric studies",
                "Conceptual models",
                "Idea presentation",
            ],
        },
    },
    ProcessStep {
        number: "03",
        title: Localized::new("Desenvolvimento", "Development"),
        subtitle: Localized::new("Cada detalhe importa", "Every detail matters"),
        description: Localized::new(
            "O conceito ganha forma através de plantas, cortes, fachadas e detalhes. Refinamos obsessivamente até alcançar a perfeição.",
            "The concept takes shape through plans, sections, facades and details. We obsessively refine until we reach perfection.",
        ),
        image: "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?w=1200&q=80",
        details: Localized {
            pt: &[
                "Projeto executivo",
                "Compatibilização",
                "Especificações técnicas",
                "Orçamento detalhado",
            ],
            en: &[
                "Executive project",
                "Compatibility",
                "Technical specifications",
                "Detailed budget",
            ],
        },
    },
    ProcessStep {
        number: "04",
        title: Localized::new("Construção", "Construction"),
        subtitle: Localized::new("Do desenho à matéria", "From drawing to matter"),
        description: Localized::new(
            "Acompanhamos cada etapa da obra, garantindo que a visão projetual se materialize com a qualidade que imaginamos.",
            "We follow every stage of the work, ensuring that the design vision materializes with the quality we envisioned.",
        ),
        image: "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?w=1200&q=80",
        details: Localized {
            pt: &[
                "Gestão de obra",
                "Controle de qualidade",
                "Soluções in loco",
                "Entrega final",
            ],
            en: &[
                "Construction management",
                "Quality control",
                "On-site solutions",
                "Final delivery",
            ],
        },
    },
];
