//! The internship presentation deck.

use super::Generator;
use crate::common::Result;
use crate::outline::{Deck, DeckBuilder, Item};

const TITLE: &str = "Eindpresentatie Stage AVE CRM";

const SUBTITLE: &str = "Professionalisering van Recruitment Software\n\nStijn van der Neut\n15 Januari 2026";

/// `Eindpresentatie_Stage_AVE_CRM.pptx`: a title slide followed by eleven
/// title-and-content slides.
#[derive(Debug, Clone, Copy, Default)]
pub struct Presentation;

impl Generator for Presentation {
    type Document = Deck;

    const FILE_NAME: &'static str = "Eindpresentatie_Stage_AVE_CRM.pptx";

    fn build(&self) -> Result<Deck> {
        Ok(DeckBuilder::new(TITLE)
            .title_slide(TITLE, SUBTITLE)
            .content_slide(
                "Agenda",
                [
                    "Project Context: AVE CRM",
                    "Mijn Rol & HBO-i Beroepstaken",
                    "Technische Diepgang (Onderzoek & Realisatie)",
                    "Persoonlijke Ontwikkeling (Reflectie)",
                    "Toekomstvisie (Strategisch Plan)",
                    "Vragen",
                ],
            )
            .content_slide(
                "Project Context: AVE CRM",
                [
                    Item::nested(
                        "Doel:",
                        [
                            "Ontwikkeling van een modern SaaS-platform voor recruitment.",
                            "Vervanging van verouderde legacy processen.",
                        ],
                    ),
                    Item::nested(
                        "Tech Stack:",
                        [
                            "Frontend: React 19 + TypeScript (Vite, Material-UI)",
                            "Backend: Laravel 12 (PHP 8.3)",
                            "Database: PostgreSQL (Multi-tenant)",
                        ],
                    ),
                    Item::nested(
                        "Infrastructuur:",
                        ["Docker, Cloudflare R2 (Storage), Google Cloud (AI)"],
                    ),
                ],
            )
            .content_slide(
                "HBO-i Beroepstaken",
                [
                    Item::nested(
                        "Software Analyseren:",
                        ["Requirements analyse, Multi-tenancy strategieën (GDPR)."],
                    ),
                    Item::nested(
                        "Software Adviseren:",
                        ["Architectuur keuzes (TanStack Query, R2 Storage)."],
                    ),
                    Item::nested(
                        "Software Ontwerpen:",
                        ["Database-per-Tenant architectuur, Hybride ID strategie."],
                    ),
                    Item::nested(
                        "Software Realiseren:",
                        ["Full-stack development, AI integraties, Outlook migratie."],
                    ),
                    Item::nested("Manage & Control:", ["Scrum werkwijze, CI/CD, Code reviews."]),
                ],
            )
            .content_slide(
                "Techniek: Multi-Tenancy Architectuur",
                [
                    Item::nested(
                        "Probleem:",
                        ["Strikte data-isolatie vereist voor GDPR (kandidaten/medische data)."],
                    ),
                    Item::nested(
                        "Oplossing: Database per Tenant",
                        [
                            "Fysiek gescheiden databases per klant.",
                            "Veiligheid 'by design' (geen vergeten WHERE-clauses).",
                        ],
                    ),
                    Item::nested(
                        "Implementatie:",
                        [
                            "Spatie Laravel Multitenancy package.",
                            "Custom 'SwitchTenantCacheTask' voor Redis isolatie.",
                        ],
                    ),
                    Item::nested(
                        "Security:",
                        [
                            "Hybride ID Strategie: Auto-increment intern (snelheid), ULID extern (veiligheid).",
                        ],
                    ),
                ],
            )
            .content_slide(
                "Techniek: AI-Driven Recruitment",
                [
                    Item::nested(
                        "Feature: CV Import & Parsing",
                        [
                            "Smart Import: Real-time via Google Gemini 3 Pro.",
                            "Bulk Import: Batch processing via Vertex AI (3500+ CVs).",
                        ],
                    ),
                    Item::nested(
                        "Pipeline:",
                        ["Frontend (Chunking) -> Queue -> AI -> R2 Storage."],
                    ),
                    Item::nested(
                        "Waarde:",
                        [
                            "Van handmatige invoer naar secondenwerk.",
                            "Automatische extractie van skills, opleiding en ervaring.",
                        ],
                    ),
                ],
            )
            .content_slide(
                "Professionalisering: Data Fetching",
                [
                    Item::nested(
                        "Oude Situatie:",
                        ["Custom hooks, geen caching, veel boilerplate code."],
                    ),
                    Item::nested(
                        "Onderzoek (DSR):",
                        ["Vergelijking TanStack Query vs SWR vs RTK Query."],
                    ),
                    Item::nested(
                        "Resultaat: TanStack Query",
                        [
                            "50% minder code in hooks.",
                            "Automatische caching, background refetching, optimistic updates.",
                            "Verbeterde User Experience (snellere navigatie).",
                        ],
                    ),
                ],
            )
            .content_slide(
                "Infrastructuur & Deployment",
                [
                    Item::nested(
                        "Cloudflare R2:",
                        [
                            "Migratie naar Object Storage voor CV's en afbeeldingen.",
                            "Schaalbaar en kosten-efficiënt.",
                        ],
                    ),
                    Item::nested(
                        "Microsoft 365 Migratie:",
                        [
                            "Professionalisering e-mail en agenda.",
                            "Integratie met CRM (Outlook kalender sync).",
                        ],
                    ),
                    Item::nested(
                        "Deployment Strategie:",
                        [
                            "Laravel Forge + DigitalOcean.",
                            "Automated deployments, SSL, Queues, Backups.",
                        ],
                    ),
                ],
            )
            .content_slide(
                "Persoonlijke Ontwikkeling (Reflectie)",
                [
                    Item::nested(
                        "Kernontwikkeling:",
                        ["Transformatie van 'Afwachtend' naar 'Proactief'."],
                    ),
                    Item::nested(
                        "Het leerproces:",
                        [
                            "Start: 'Ik moet het alleen oplossen' (onzekerheid).",
                            "Inzicht: Hulp vragen is professioneel eigenaarschap.",
                        ],
                    ),
                    Item::nested(
                        "Acties:",
                        [
                            "Wekelijkse meetings geïnitieerd.",
                            "Zelf de agenda en planning bepalen.",
                        ],
                    ),
                ],
            )
            .content_slide(
                "Veerkracht & Herstel",
                [
                    Item::nested(
                        "Situatie:",
                        ["Terugval door persoonlijke omstandigheden ('Oestergedrag')."],
                    ),
                    Item::nested(
                        "Leermoment:",
                        [
                            "Niet harder werken, maar eerder communiceren.",
                            "Transparantie over 'mindere dagen' bouwt juist vertrouwen.",
                        ],
                    ),
                    Item::nested(
                        "Resultaat:",
                        [
                            "Regie herpakt, Outlook koppeling succesvol afgerond.",
                            "Bewijs van veerkracht (niveau 2/3).",
                        ],
                    ),
                ],
            )
            .content_slide(
                "Strategisch Langetermijnplan",
                [
                    Item::nested(
                        "Fase 1: MVP & Fundering (Nu)",
                        ["Technische realisatie & Multi-tenancy architectuur."],
                    ),
                    Item::nested(
                        "Fase 2: Interne Validatie",
                        ["'Eat your own dog food' - optimalisatie door eigen gebruik."],
                    ),
                    Item::nested(
                        "Fase 3: SaaS Commercialisering",
                        ["White-label verkoop aan andere bureaus (1.5 - 2 jaar)."],
                    ),
                    Item::nested(
                        "Expansie:",
                        ["Opzetten interne ICT-recruitment tak gefaciliteerd door het CRM."],
                    ),
                ],
            )
            .content_slide(
                "Conclusie",
                [
                    "Product:",
                    "Een modern, veilig en schaalbaar SaaS CRM.",
                    "Proces:",
                    "Methodisch gewerkt (DSR, Scrum, Code Reviews).",
                    "Persoonlijk:",
                    "Gegroeid van Junior Developer naar Strategisch Partner.",
                    "",
                    "Zijn er nog vragen?",
                ],
            )
            .build())
    }
}
