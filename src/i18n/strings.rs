/// All localized page chrome strings for a locale.
///
/// Content records (projects, process steps, team) carry their own per-locale
/// fields; this table only holds the fixed texts of the page layouts.
/// Strings are stored unescaped and escaped at render time.
#[derive(Debug, Clone)]
pub struct UiStrings {
    // ==================== Navigation ====================
    pub brand_tagline: &'static str,
    pub nav_home: &'static str,
    pub nav_projects: &'static str,
    pub nav_process: &'static str,
    pub nav_studio: &'static str,
    pub nav_contact: &'static str,
    /// Accessible label of the language switch link
    pub language_switch_label: &'static str,

    // ==================== Footer ====================
    pub footer_tagline: &'static str,
    pub footer_navigation: &'static str,
    pub footer_contact: &'static str,
    pub footer_rights: &'static str,
    pub footer_made_with: &'static str,

    // ==================== Home ====================
    pub hero_line_1: &'static str,
    pub hero_line_2: &'static str,
    pub hero_lead: &'static str,
    pub manifesto_label: &'static str,
    pub manifesto_text: &'static str,
    pub showcase_label: &'static str,
    pub showcase_title: &'static str,
    pub view_all: &'static str,
    pub process_label: &'static str,
    pub process_title: &'static str,
    pub process_preview_lead: &'static str,
    pub explore_process: &'static str,
    pub teaser_label: &'static str,
    pub teaser_title_1: &'static str,
    pub teaser_title_2: &'static str,
    pub teaser_lead: &'static str,

    // ==================== Projects ====================
    pub portfolio_label: &'static str,
    pub projects_title: &'static str,
    /// Shown when a category filter matches nothing
    pub projects_empty: &'static str,

    // ==================== Project Detail ====================
    pub back: &'static str,
    pub location: &'static str,
    pub area: &'static str,
    pub year: &'static str,
    pub client: &'static str,
    pub previous_image: &'static str,
    pub next_image: &'static str,
    pub explore_more: &'static str,
    pub view_all_projects: &'static str,

    // ==================== Process ====================
    pub process_lead: &'static str,
    pub process_cta: &'static str,
    pub contact_us: &'static str,

    // ==================== Studio ====================
    pub about_label: &'static str,
    pub studio_title: &'static str,
    pub story_label: &'static str,
    pub story_headline: &'static str,
    pub story_body_1: &'static str,
    pub story_body_2: &'static str,
    pub values_label: &'static str,
    pub values_title: &'static str,
    pub team_label: &'static str,
    pub team_title: &'static str,
    pub recognition_title: &'static str,

    // ==================== Contact ====================
    pub contact_label: &'static str,
    pub contact_title: &'static str,
    pub contact_headline: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub social_media: &'static str,
    pub form_title: &'static str,
    pub form_lead: &'static str,
    pub field_name: &'static str,
    pub field_email: &'static str,
    pub field_phone: &'static str,
    pub field_project_type: &'static str,
    pub field_message: &'static str,
    pub select_placeholder: &'static str,
    pub message_placeholder: &'static str,
    pub sending: &'static str,
    pub send_message: &'static str,
    pub message_sent: &'static str,
    pub message_sent_lead: &'static str,
    /// Prefix of the list of blank required fields
    pub missing_fields: &'static str,

    // ==================== Not Found ====================
    pub not_found_title: &'static str,
    pub not_found_lead: &'static str,
    pub back_home: &'static str,
}

// ==================== Portuguese Strings ====================

/// Portuguese strings (default locale)
pub const PORTUGUESE_STRINGS: UiStrings = UiStrings {
    brand_tagline: "Arquitetura & Engenharia",
    nav_home: "Início",
    nav_projects: "Projetos",
    nav_process: "Processo",
    nav_studio: "Estúdio",
    nav_contact: "Contato",
    language_switch_label: "Mudar idioma",

    footer_tagline: "Construindo visões",
    footer_navigation: "Navegação",
    footer_contact: "Contato",
    footer_rights: "Todos os direitos reservados.",
    footer_made_with: "Feito com propósito.",

    hero_line_1: "Construímos",
    hero_line_2: "visões.",
    hero_lead: "Arquitetura que transcende o convencional. Cada projeto é uma narrativa espacial única.",
    manifesto_label: "Manifesto",
    manifesto_text: "Cada espaço que criamos é uma resposta ao seu contexto: luz, topografia, pessoas. Não projetamos edifícios. Projetamos experiências de habitar.",
    showcase_label: "Trabalhos Selecionados",
    showcase_title: "Projetos",
    view_all: "Ver Todos",
    process_label: "Nosso Método",
    process_title: "Processo",
    process_preview_lead: "Como transformamos ideias em espaços.",
    explore_process: "Explorar Processo",
    teaser_label: "Próximo Passo",
    teaser_title_1: "Vamos criar",
    teaser_title_2: "juntos?",
    teaser_lead: "Cada projeto começa com uma conversa. Estamos prontos para ouvir a sua visão.",

    portfolio_label: "Portfólio",
    projects_title: "Projetos",
    projects_empty: "Nenhum projeto nesta categoria.",

    back: "Voltar",
    location: "Localização",
    area: "Área",
    year: "Ano",
    client: "Cliente",
    previous_image: "Imagem anterior",
    next_image: "Próxima imagem",
    explore_more: "Explorar mais",
    view_all_projects: "Ver todos os projetos",

    process_lead: "Cada projeto é uma jornada única. Nosso processo garante que cada etapa seja tratada com a atenção que merece.",
    process_cta: "Pronto para começar sua jornada?",
    contact_us: "Fale Conosco",

    about_label: "Sobre Nós",
    studio_title: "Estúdio",
    story_label: "Nossa História",
    story_headline: "Fundada em 2012, a View nasceu da crença de que arquitetura é mais do que construir.",
    story_body_1: "Somos um escritório multidisciplinar que integra arquitetura e engenharia em uma abordagem única. Cada projeto é tratado como uma oportunidade de criar espaços que transformam a vida das pessoas.",
    story_body_2: "Ao longo de mais de uma década, desenvolvemos projetos que vão de residências íntimas a complexos comerciais, sempre com o mesmo compromisso: excelência técnica e sensibilidade espacial.",
    values_label: "Nossos Valores",
    values_title: "O que nos guia",
    team_label: "Equipe",
    team_title: "Quem faz acontecer",
    recognition_title: "Reconhecimentos",

    contact_label: "Vamos Conversar",
    contact_title: "Contato",
    contact_headline: "Cada projeto começa com uma conversa.",
    address: "Endereço",
    phone: "Telefone",
    social_media: "Redes Sociais",
    form_title: "Conte-nos sobre seu projeto",
    form_lead: "Preencha o formulário abaixo e entraremos em contato em até 48 horas.",
    field_name: "Nome",
    field_email: "Email",
    field_phone: "Telefone",
    field_project_type: "Tipo de Projeto",
    field_message: "Mensagem",
    select_placeholder: "Selecione...",
    message_placeholder: "Conte-nos sobre sua visão, terreno, orçamento estimado...",
    sending: "Enviando...",
    send_message: "Enviar Mensagem",
    message_sent: "Mensagem Enviada!",
    message_sent_lead: "Obrigado pelo seu interesse. Nossa equipe entrará em contato em breve.",
    missing_fields: "Preencha os campos obrigatórios:",

    not_found_title: "Página não encontrada",
    not_found_lead: "O conteúdo que você procura não existe ou foi removido.",
    back_home: "Voltar ao início",
};

// ==================== English Strings ====================

/// English strings
pub const ENGLISH_STRINGS: UiStrings = UiStrings {
    brand_tagline: "Architecture & Engineering",
    nav_home: "Home",
    nav_projects: "Projects",
    nav_process: "Process",
    nav_studio: "Studio",
    nav_contact: "Contact",
    language_switch_label: "Toggle language",

    footer_tagline: "Building visions",
    footer_navigation: "Navigation",
    footer_contact: "Contact",
    footer_rights: "All rights reserved.",
    footer_made_with: "Made with purpose.",

    hero_line_1: "We build",
    hero_line_2: "visions.",
    hero_lead: "Architecture that transcends the conventional. Each project is a unique spatial narrative.",
    manifesto_label: "Manifesto",
    manifesto_text: "Every space we create is a response to its context: light, topography, people. We don't design buildings. We design experiences of dwelling.",
    showcase_label: "Selected Works",
    showcase_title: "Projects",
    view_all: "View All",
    process_label: "Our Method",
    process_title: "Process",
    process_preview_lead: "How we transform ideas into spaces.",
    explore_process: "Explore Process",
    teaser_label: "Next Step",
    teaser_title_1: "Let's create",
    teaser_title_2: "together?",
    teaser_lead: "Every project starts with a conversation. We're ready to hear your vision.",

    portfolio_label: "Portfolio",
    projects_title: "Projects",
    projects_empty: "No projects in this category.",

    back: "Back",
    location: "Location",
    area: "Area",
    year: "Year",
    client: "Client",
    previous_image: "Previous image",
    next_image: "Next image",
    explore_more: "Explore more",
    view_all_projects: "View all projects",

    process_lead: "Each project is a unique journey. Our process ensures that each stage is treated with the attention it deserves.",
    process_cta: "Ready to start your journey?",
    contact_us: "Contact Us",

    about_label: "About Us",
    studio_title: "Studio",
    story_label: "Our Story",
    story_headline: "Founded in 2012, View was born from the belief that architecture is more than building.",
    story_body_1: "We are a multidisciplinary office that integrates architecture and engineering in a unique approach. Each project is treated as an opportunity to create spaces that transform people's lives.",
    story_body_2: "Over more than a decade, we have developed projects ranging from intimate residences to commercial complexes, always with the same commitment: technical excellence and spatial sensitivity.",
    values_label: "Our Values",
    values_title: "What guides us",
    team_label: "Team",
    team_title: "Who makes it happen",
    recognition_title: "Recognition",

    contact_label: "Let's Talk",
    contact_title: "Contact",
    contact_headline: "Every project starts with a conversation.",
    address: "Address",
    phone: "Phone",
    social_media: "Social Media",
    form_title: "Tell us about your project",
    form_lead: "Fill out the form below and we'll get back to you within 48 hours.",
    field_name: "Name",
    field_email: "Email",
    field_phone: "Phone",
    field_project_type: "Project Type",
    field_message: "Message",
    select_placeholder: "Select...",
    message_placeholder: "Tell us about your vision, site, estimated budget...",
    sending: "Sending...",
    send_message: "Send Message",
    message_sent: "Message Sent!",
    message_sent_lead: "Thank you for your interest. Our team will contact you soon.",
    missing_fields: "Please fill in the required fields:",

    not_found_title: "Page not found",
    not_found_lead: "The content you are looking for does not exist or was removed.",
    back_home: "Back to home",
};
