use std::time::Duration;

use bevy::prelude::*;

use crate::constants::TILE_POP_IN;

/// Scales a freshly created tile from nothing to full size
#[derive(Component, Debug, Default)]
pub struct PopIn {
    pub elapsed: Duration,
}

impl PopIn {
    /// Current scale factor in `0.0..=1.0`
    pub fn progress(&self) -> f32 {
        (self.elapsed.as_secs_f32() / TILE_POP_IN.as_secs_f32()).min(1.0)
    }
}

pub fn animate_pop_in(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Transform, &mut PopIn)>,
) {
    for (entity, mut transform, mut pop_in) in query.iter_mut() {
        pop_in.elapsed += time.delta();
        let progress = pop_in.progress();
        transform.scale = Vec3::splat(progress);

        if progress >= 1.0 {
            commands.entity(entity).remove::<PopIn>();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_in_starts_at_zero() {
        assert_eq!(PopIn::default().progress(), 0.0);
    }

    #[test]
    fn test_pop_in_halfway() {
        let pop_in = PopIn {
            elapsed: TILE_POP_IN / 2,
        };
        assert!((pop_in.progress() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_pop_in_clamps_at_full_size() {
        let pop_in = PopIn {
            elapsed: TILE_POP_IN * 3,
        };
        assert_eq!(pop_in.progress(), 1.0);
    }
}
