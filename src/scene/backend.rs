//! Bevy implementation of the scene collaborator.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::tiling::{CameraPose, Scene, TileOrientation};

use super::animation::PopIn;
use super::viewer::ViewerCamera;
use super::{CornerMarker, PlacedTile, TileAssets};

/// Everything the placement session needs to touch in the world
#[derive(SystemParam)]
#[allow(clippy::type_complexity)]
pub struct SceneParams<'w, 's> {
    commands: Commands<'w, 's>,
    assets: Res<'w, TileAssets>,
    camera: Query<'w, 's, &'static Transform, With<ViewerCamera>>,
    placed: Query<'w, 's, Entity, Or<(With<PlacedTile>, With<CornerMarker>)>>,
    markers: Query<'w, 's, &'static mut Visibility, With<CornerMarker>>,
}

impl Scene for SceneParams<'_, '_> {
    type Handle = Entity;

    fn camera_pose(&self) -> Option<CameraPose> {
        let transform = self.camera.single().ok()?;
        let (yaw, _, _) = transform.rotation.to_euler(EulerRot::YXZ);
        Some(CameraPose {
            position: transform.translation,
            yaw_degrees: yaw.to_degrees(),
        })
    }

    fn create_tile(&mut self, center: Vec3, orientation: TileOrientation) -> Entity {
        self.commands
            .spawn((
                Mesh3d(self.assets.tile_mesh.clone()),
                MeshMaterial3d(self.assets.tile_material.clone()),
                Transform::from_translation(center)
                    .with_rotation(orientation.rotation())
                    .with_scale(Vec3::ZERO),
                PlacedTile,
                PopIn::default(),
            ))
            .id()
    }

    fn create_corner_marker(&mut self, center: Vec3, label: usize, visible: bool) {
        self.commands.spawn((
            Mesh3d(self.assets.marker_mesh.clone()),
            MeshMaterial3d(self.assets.marker_material.clone()),
            Transform::from_translation(center),
            marker_visibility(visible),
            CornerMarker { label },
        ));
    }

    fn clear_all(&mut self) {
        let mut count = 0;
        for entity in self.placed.iter() {
            self.commands.entity(entity).despawn();
            count += 1;
        }
        debug!("Removed {} tiles and markers", count);
    }

    fn set_markers_visible(&mut self, visible: bool) {
        let visibility = marker_visibility(visible);
        for mut marker in self.markers.iter_mut() {
            *marker = visibility;
        }
    }
}

fn marker_visibility(visible: bool) -> Visibility {
    if visible {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_markers_spawn_hidden() {
        assert_eq!(marker_visibility(false), Visibility::Hidden);
        assert_eq!(marker_visibility(true), Visibility::Inherited);
    }
}
