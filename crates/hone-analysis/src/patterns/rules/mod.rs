//! The built-in rewrite rule set, one module per quality dimension.
//!
//! Registration order is part of the contract: it is the deterministic
//! tie-break wherever effective priorities compare equal.

pub mod actionability;
pub mod clarity;
pub mod completeness;
pub mod comprehensive;
pub mod efficiency;
pub mod specificity;
pub mod structure;

use super::catalog::PatternCatalog;

/// Register every built-in rule.
pub fn register_builtin(catalog: &mut PatternCatalog) {
    // Clarity
    catalog.register(Box::new(clarity::ClarifyVagueTerms));
    catalog.register(Box::new(clarity::ResolveAmbiguousPronouns));
    catalog.register(Box::new(clarity::SharpenGoalStatement));

    // Structure
    catalog.register(Box::new(structure::AddSectionHeaders));
    catalog.register(Box::new(structure::BulletizeEnumerations));

    // Completeness
    catalog.register(Box::new(completeness::RequestCodeContext));
    catalog.register(Box::new(completeness::RequireErrorHandling));
    catalog.register(Box::new(completeness::RequestReproSteps));
    catalog.register(Box::new(completeness::AddConstraintsSection));
    catalog.register(Box::new(completeness::AddAcceptanceCriteria));

    // Actionability
    catalog.register(Box::new(actionability::ImperativeOpening));
    catalog.register(Box::new(actionability::AddVerificationStep));
    catalog.register(Box::new(actionability::SpecifyDeliverable));

    // Specificity
    catalog.register(Box::new(specificity::QuantifyVagueQualifiers));
    catalog.register(Box::new(specificity::NameTechnologies));
    catalog.register(Box::new(specificity::GroupFileReferences));

    // Efficiency
    catalog.register(Box::new(efficiency::StripFillerPhrases));
    catalog.register(Box::new(efficiency::DeduplicateSentences));
    catalog.register(Box::new(efficiency::CollapseWhitespace));

    // Comprehensive tier
    catalog.register(Box::new(comprehensive::AddEdgeCaseChecklist));
    catalog.register(Box::new(comprehensive::AddSecurityChecklist));
    catalog.register(Box::new(comprehensive::AddRollbackPlan));
    catalog.register(Box::new(comprehensive::AddTestMatrix));
}
