/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Number of egg samples per half of the face contour
pub const FACE_SEGMENT_POINTS: usize = 100;

/// Number of samples taken along each eyelid
pub const EYELID_STEPS: usize = 100;

/// Number of samples taken along the curved mouth variants
pub const MOUTH_STEPS: usize = 100;

/// Number of quadrant samples in the open-mouth egg
pub const MOUTH_EGG_SEGMENT_POINTS: usize = 50;

/// Skew used by the open-mouth egg
pub const MOUTH_EGG_K: f64 = 0.001;

/// Strands whose end points are further apart than this are never joined
pub const HAIR_MERGE_DISTANCE: f64 = 100.0;

/// Range of lid samples used to build the clip contour for an eye
pub const EYE_CLIP_START: usize = 10;
pub const EYE_CLIP_END: usize = 90;
