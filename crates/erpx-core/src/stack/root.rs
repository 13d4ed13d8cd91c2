use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ProjectName;

use super::{
    AiModule, ConstraintItem, DataLayer, DevEx, DevOps, EvaluationCriterion, HistoricalDecision,
    Nfrs, OperationalContext, RiskItem, TechChoice, TimelineConstraint,
};

/// The technology-stack decision record for ERPx.
///
/// Root aggregate of the schema. Lists keep their document order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename = "ERPxStack")]
pub struct ErpxStack {
    /// Always the literal `ERPx`.
    pub project_name: ProjectName,
    /// e.g. `["sales", "inventory", "accounting"]`.
    pub domain_focus: Vec<String>,
    /// e.g. Next.js, Tailwind, shadcn/ui.
    pub frontend: Vec<TechChoice>,
    /// e.g. FastAPI, Node/NestJS.
    pub backend: Vec<TechChoice>,
    pub data: DataLayer,
    pub ai: AiModule,
    pub devops: DevOps,
    pub dev_experience: DevEx,
    pub nfrs: Nfrs,
    /// Constraints with explicit priority.
    pub constraints: Vec<ConstraintItem>,
    /// Criteria to rank competing options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation_criteria: Option<Vec<EvaluationCriterion>>,
    pub operational_context: OperationalContext,
    /// Milestones and critical deadlines.
    pub timeline: Vec<TimelineConstraint>,
    /// Prior decisions and their outcomes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<HistoricalDecision>>,
    pub risks: Vec<RiskItem>,
    /// Deliverables achievable in 2-4 weeks.
    pub roadmap_quickwins: Vec<String>,
}

impl ErpxStack {
    /// Every technology choice in the record, in document order.
    ///
    /// Useful for consumers that index or list the chosen technologies
    /// without caring which section they came from.
    #[must_use]
    pub fn tech_choices(&self) -> Vec<&TechChoice> {
        let mut out: Vec<&TechChoice> = Vec::new();
        out.extend(&self.frontend);
        out.extend(&self.backend);

        let data = &self.data;
        out.push(&data.primary_db);
        out.extend(
            [
                &data.orm,
                &data.cache,
                &data.search,
                &data.analytics_dw,
                &data.messaging,
            ]
            .into_iter()
            .flatten(),
        );

        out.extend(&self.ai.inference);
        out.extend(&self.ai.vector_db);

        let devops = &self.devops;
        out.extend(&devops.runtime);
        out.extend(&devops.infra_as_code);
        out.push(&devops.observability.logging);
        out.push(&devops.observability.metrics);
        out.extend(&devops.observability.tracing);
        out.push(&devops.security.auth);
        out.push(&devops.security.secrets);

        let devex = &self.dev_experience;
        out.push(&devex.ci_cd);
        out.push(&devex.testing.unit);
        out.extend(&devex.testing.e2e);
        out.extend(&devex.testing.contract);
        out
    }
}
