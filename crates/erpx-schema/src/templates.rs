//! Starter stack documents printed by `erpx template`.

use erpx_core::enums::{
    AdoptionStatus, CloudProvider, ExperienceLevel, Maturity, PackageManager, PriorityLevel,
    ProjectName, Severity,
};
use erpx_core::stack::{
    AiModule, CloudTarget, ConstraintItem, CostGuardrails, DataLayer, DevEx, DevOps, ErpxStack,
    EvaluationCriterion, HistoricalDecision, MetricValue, Nfrs, Observability, OperationalContext,
    RiskItem, SecurityOps, TechChoice, TechMetric, TestingStrategy, TimelineConstraint,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// The smallest document that conforms: every mandatory field, nothing else.
#[must_use]
pub fn minimal_stack() -> ErpxStack {
    ErpxStack {
        project_name: ProjectName::Erpx,
        domain_focus: strings(&["sales"]),
        frontend: vec![TechChoice::new("Next.js", "server rendering for the portal")],
        backend: vec![TechChoice::new("FastAPI", "typed request models")],
        data: DataLayer::with_primary(TechChoice::new("PostgreSQL", "relational core")),
        ai: AiModule {
            inference: vec![TechChoice::new("OpenAI", "hosted inference")],
            vector_db: None,
            rag_pipeline: None,
            safety: None,
        },
        devops: DevOps {
            runtime: vec![TechChoice::new("Docker", "reproducible builds")],
            infra_as_code: None,
            deploy_target: CloudTarget {
                provider: CloudProvider::Gcp,
                region: None,
                reasoning: "managed containers with scale to zero".into(),
            },
            cost: CostGuardrails::default(),
            observability: Observability {
                logging: TechChoice::new("Cloud Logging", "native to the platform"),
                metrics: TechChoice::new("Prometheus", "portable metrics"),
                tracing: None,
                dashboards: None,
            },
            security: SecurityOps {
                auth: TechChoice::new("Keycloak", "single sign-on"),
                secrets: TechChoice::new("Google Secret Manager", "IAM-scoped secrets"),
                policies: Vec::new(),
            },
        },
        dev_experience: DevEx {
            monorepo: None,
            package_manager: PackageManager::Pnpm,
            codegen: None,
            ci_cd: TechChoice::new("GitHub Actions", "hosted runners"),
            testing: TestingStrategy {
                unit: TechChoice::new("pytest", "backend unit tests"),
                e2e: None,
                contract: None,
            },
        },
        nfrs: Nfrs::default(),
        constraints: Vec::new(),
        evaluation_criteria: None,
        operational_context: OperationalContext::default(),
        timeline: Vec::new(),
        history: None,
        risks: Vec::new(),
        roadmap_quickwins: Vec::new(),
    }
}

/// A fully populated document exercising every section.
#[must_use]
pub fn full_stack() -> ErpxStack {
    let mut stack = minimal_stack();
    stack.domain_focus = strings(&["sales", "inventory", "accounting"]);

    stack.frontend = vec![
        TechChoice {
            version: Some("14".into()),
            status: Some(AdoptionStatus::Current),
            priority: Some(PriorityLevel::MustHave),
            desired_score: Some(85.0),
            maturity: Some(Maturity::Ga),
            metrics: Some(vec![TechMetric {
                metric: "lcp_p75_ms".into(),
                value: MetricValue::Number(1800.0),
                unit: Some("ms".into()),
                notes: Some("staging lighthouse run".into()),
            }]),
            alternatives: Some(strings(&["Remix", "SvelteKit"])),
            ..TechChoice::new("Next.js", "server rendering for the portal")
        },
        TechChoice {
            priority: Some(PriorityLevel::ShouldHave),
            ..TechChoice::new("Tailwind CSS", "consistent design tokens")
        },
    ];
    stack.backend = vec![TechChoice {
        version: Some("0.110".into()),
        status: Some(AdoptionStatus::Proposed),
        tco_estimate_usd: Some(12_000.0),
        benchmarks: Some(strings(&["techempower round 22"])),
        ..TechChoice::new("FastAPI", "typed request models")
    }];

    stack.data.orm = Some(TechChoice::new("SQLAlchemy", "migrations via Alembic"));
    stack.data.cache = Some(TechChoice::new("Redis", "sessions and rate limits"));
    stack.data.search = Some(TechChoice::new("Meilisearch", "typo-tolerant product search"));
    stack.data.analytics_dw = Some(TechChoice {
        maturity: Some(Maturity::Beta),
        ..TechChoice::new("DuckDB", "embedded analytics")
    });
    stack.data.messaging = Some(TechChoice {
        alternatives: Some(strings(&["Kafka", "Pub/Sub"])),
        ..TechChoice::new("RabbitMQ", "work queues for invoicing")
    });

    stack.ai.inference.push(TechChoice {
        priority: Some(PriorityLevel::NiceToHave),
        ..TechChoice::new("Ollama", "on-prem fallback")
    });
    stack.ai.vector_db = Some(TechChoice::new("pgvector", "no extra database to operate"));
    stack.ai.rag_pipeline = Some(strings(&["chunk", "embed", "retrieve top-k", "answer"]));
    stack.ai.safety = Some(strings(&["PII redaction", "prompt injection filter"]));

    stack.devops.runtime.push(TechChoice::new("Cloud Run", "scale to zero"));
    stack.devops.infra_as_code = Some(TechChoice::new("Terraform", "declarative infrastructure"));
    stack.devops.deploy_target.region = Some("us-central1".into());
    stack.devops.cost = CostGuardrails {
        monthly_budget_usd: Some(1500.0),
        cost_tactics: strings(&["scale to zero", "committed use discounts"]),
    };
    stack.devops.observability.tracing =
        Some(TechChoice::new("OpenTelemetry", "vendor-neutral tracing"));
    stack.devops.observability.dashboards = Some(strings(&["Grafana: api-latency, error-rate"]));
    stack.devops.security.policies = strings(&["least privilege", "CIS baseline"]);

    stack.dev_experience.monorepo = Some(true);
    stack.dev_experience.codegen = Some(strings(&["OpenAPI -> clients"]));
    stack.dev_experience.testing.e2e = Some(TechChoice::new("Playwright", "cross-browser"));
    stack.dev_experience.testing.contract = Some(TechChoice::new("Pact", "API contracts"));

    stack.nfrs = Nfrs {
        availability_slo: Some("99.9%".into()),
        latency_p50_ms: Some(120.0),
        latency_p95_ms: Some(450.0),
        data_retention_days: Some(2555.0),
        compliance: Some(strings(&["GDPR", "SOC2"])),
        i18n_locales: Some(strings(&["es-PA", "en-US"])),
    };

    stack.constraints = vec![
        ConstraintItem {
            description: "Offline support for sales".into(),
            priority: PriorityLevel::MustHave,
            weight: Some(0.4),
            desired_score: None,
            rationale: Some("field reps lose coverage".into()),
        },
        ConstraintItem {
            description: "Multi-currency ledgers".into(),
            priority: PriorityLevel::ShouldHave,
            weight: Some(0.2),
            desired_score: Some(70.0),
            rationale: None,
        },
    ];
    stack.evaluation_criteria = Some(vec![EvaluationCriterion {
        name: "Annual TCO".into(),
        weight: 0.5,
        target: Some("< 20k USD".into()),
        description: Some("licences plus hosting".into()),
    }]);
    stack.operational_context = OperationalContext {
        team_size: Some(6.0),
        team_experience_level: Some(ExperienceLevel::Mixed),
        core_languages: Some(strings(&["Python", "TypeScript"])),
        annual_budget_usd: Some(180_000.0),
        outsourcing_ratio: Some(0.2),
        regulated_slas: None,
        legal_requirements: Some(strings(&["PCI"])),
        customer_segments: Some(strings(&["SMB distributors"])),
    };
    stack.timeline = vec![
        TimelineConstraint {
            phase: "MVP".into(),
            start_date: Some("2025-01-06".into()),
            end_date: Some("2025-04-30".into()),
            goal: Some("orders and stock".into()),
            notes: None,
        },
        TimelineConstraint {
            phase: "Scaling".into(),
            start_date: None,
            end_date: None,
            goal: None,
            notes: Some("depends on hiring".into()),
        },
    ];
    stack.history = Some(vec![HistoricalDecision {
        decision: "Adopt PostgreSQL".into(),
        date: Some("2024-09-01".into()),
        outcome: Some("stable".into()),
        notes: None,
    }]);
    stack.risks = vec![RiskItem {
        item: "Vendor lock-in on Cloud Run".into(),
        mitigation: "keep containers portable".into(),
        severity: Some(Severity::Medium),
        impacted_domains: Some(strings(&["operations"])),
    }];
    stack.roadmap_quickwins = strings(&["CSV import for stock", "invoice PDF export"]);
    stack
}
