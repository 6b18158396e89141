//! Instance generation pipeline.
//!
//! 1. Select the monster definition for the requested version
//! 2. Build the card pool for that monster and version
//! 3. Remove cards already in play
//! 4. Resolve template tokens (drawing `{X}` tokens from the pool)
//! 5. Shuffle the loose cards, then reinsert fixed-position cards
//! 6. Compute the life total
//!
//! Everything runs synchronously on the caller's thread against an immutable
//! catalog. The only mutable state is the per-call pool and the caller's RNG.
//!
//! ## Example
//!
//! ```
//! use kda_deck::catalog::{Catalog, MonsterDefinition, MonsterLevel};
//! use kda_deck::core::DeckRng;
//! use kda_deck::generator::{GenerationRequest, InstanceGenerator};
//!
//! let mut catalog = Catalog::new();
//! catalog.upsert_monster(
//!     MonsterDefinition::new("White Lion", MonsterLevel::L1)
//!         .with_version("1.5")
//!         .with_cards("[0]Claw,~Ambush"),
//! );
//!
//! let generator = InstanceGenerator::default();
//! let request = GenerationRequest::new("White Lion", MonsterLevel::L1);
//! let instance = generator.generate(&catalog, &request, &mut DeckRng::new(1)).unwrap();
//!
//! assert_eq!(instance.cards, vec!["Claw", "~Ambush"]);
//! assert_eq!(instance.version, "1.5");
//! ```

use log::{debug, info};

use super::instance::{GeneratedInstance, GenerationRequest};
use crate::catalog::{Catalog, CatalogSource, MonsterDefinition, MonsterLevel};
use crate::core::{version, DeckRng, GenerationConfig, GenerationError, GenerationResult};
use crate::deck::{compose, compute_life, shuffle, DrawEngine, FixedCard};
use crate::pool::{exclude_for_monster, CardPool, CardPoolBuilder};
use crate::template::{parse_template, strip_version_marks, TokenBody};

/// Generates monster instances from a catalog.
#[derive(Clone, Debug, Default)]
pub struct InstanceGenerator {
    config: GenerationConfig,
}

impl InstanceGenerator {
    #[must_use]
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    fn draw_engine(&self) -> DrawEngine {
        DrawEngine::new(self.config.draw_mode, self.config.removal)
    }

    /// Pick the monster definition and resolved version for a request.
    ///
    /// With a version, the first revision listing it wins. Without, the
    /// revision with the highest listed version wins (first on ties) and its
    /// highest version entry is returned. Revisions whose versions cannot be
    /// encoded are skipped.
    pub fn select_definition<'a>(
        &self,
        catalog: &'a Catalog,
        name: &str,
        level: MonsterLevel,
        requested: Option<&str>,
    ) -> Option<(&'a MonsterDefinition, String)> {
        let name = strip_version_marks(name);
        let requested = requested.map(str::trim).filter(|v| !v.is_empty());

        if let Some(wanted) = requested {
            return catalog
                .revisions(name, level)
                .find(|m| version::contains(wanted, &m.version))
                .map(|m| (m, wanted.to_string()));
        }

        let mut best: Option<(u64, &'a MonsterDefinition, String)> = None;
        for monster in catalog.revisions(name, level) {
            match version::highest_entry(&monster.version) {
                Some((value, text)) => {
                    if best.as_ref().map_or(true, |(b, _, _)| value > *b) {
                        best = Some((value, monster, text.to_string()));
                    }
                }
                None => debug!("skipping {} ({level}): no usable version", monster.key),
            }
        }
        best.map(|(_, monster, text)| (monster, text))
    }

    /// Turn a deck template into an ordered deck, drawing from `pool`.
    ///
    /// Always yields one card per template token.
    pub fn build_deck(&self, template: &str, pool: &mut CardPool, rng: &mut DeckRng) -> Vec<String> {
        let tokens = parse_template(template);
        if tokens.is_empty() {
            return Vec::new();
        }

        let engine = self.draw_engine();
        let mut loose = Vec::with_capacity(tokens.len());
        let mut fixed = Vec::new();

        for token in &tokens {
            let title = match &token.body {
                TokenBody::Literal(name) => name.clone(),
                TokenBody::LevelDraw(level) => engine.draw(pool, level, rng),
            };
            let name = token.deck_name(&title);

            match token.fixed_position {
                Some(position) => fixed.push(FixedCard::new(position, name)),
                None => loose.push(name),
            }
        }

        shuffle(&mut loose, &self.config, rng);
        compose(loose, fixed)
    }

    /// Generate an instance from a catalog snapshot.
    pub fn generate(
        &self,
        catalog: &Catalog,
        request: &GenerationRequest,
        rng: &mut DeckRng,
    ) -> GenerationResult<GeneratedInstance> {
        let (definition, resolved) = self
            .select_definition(catalog, &request.monster, request.level, request.version.as_deref())
            .ok_or_else(|| GenerationError::DefinitionNotFound {
                name: request.monster.clone(),
                level: request.level.to_string(),
                version: request.version.clone(),
            })?;

        debug!(
            "selected definition {} ({}) version {resolved}",
            definition.key, definition.level
        );

        let mut pool = CardPoolBuilder::new(catalog)
            .with_max_size(self.config.max_pool_size)
            .build(&definition.key, Some(&resolved));
        exclude_for_monster(&mut pool, definition);

        let cards = self.build_deck(&definition.cards, &mut pool, rng);
        let life = compute_life(&definition.traits, &definition.additional_modifiers);

        info!(
            "generated {} ({}) version {resolved}: {} cards, life {life}",
            definition.base_name(),
            definition.level,
            cards.len()
        );

        Ok(GeneratedInstance::from_definition(definition, resolved, cards, life))
    }

    /// Snapshot a catalog source, then generate from it.
    pub fn generate_from_source<S: CatalogSource + ?Sized>(
        &self,
        source: &S,
        request: &GenerationRequest,
        rng: &mut DeckRng,
    ) -> GenerationResult<GeneratedInstance> {
        let catalog = Catalog::snapshot(source);
        self.generate(&catalog, request, rng)
    }
}

/// Generate an instance with the default configuration.
pub fn generate_instance(
    catalog: &Catalog,
    monster: &str,
    level: MonsterLevel,
    version: Option<&str>,
    rng: &mut DeckRng,
) -> GenerationResult<GeneratedInstance> {
    let mut request = GenerationRequest::new(monster, level);
    if let Some(v) = version {
        request = request.with_version(v);
    }
    InstanceGenerator::default().generate(catalog, &request, rng)
}
