/*
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! LRU-evicted cache of decoded Kitty images plus their placements
//! (`spec.md` §4.F). Eviction is driven purely by `max_total_bytes`; a
//! single oversize image is rejected outright by `max_single_bytes` rather
//! than evicting everything else to make room.

use rustc_hash::FxHashMap;

use crate::error::KittyError;
use crate::kitty::image::DecodedImage;
use crate::kitty::placement::{DeleteTarget, Placement};

pub struct CachedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl CachedImage {
    fn byte_len(&self) -> usize { self.rgba.len() }
}

pub struct KittyImageCache {
    images: FxHashMap<u32, CachedImage>,
    /// Most-recently-used id at the back.
    lru: Vec<u32>,
    total_bytes: usize,
    max_total_bytes: usize,
    max_single_bytes: usize,
    placements: Vec<Placement>,
    max_placements: usize,
}

impl KittyImageCache {
    pub fn new(max_total_bytes: usize, max_single_bytes: usize, max_placements: usize) -> Self {
        Self {
            images: FxHashMap::default(),
            lru: Vec::new(),
            total_bytes: 0,
            max_total_bytes,
            max_single_bytes,
            placements: Vec::new(),
            max_placements,
        }
    }

    pub fn len(&self) -> usize { self.images.len() }
    pub fn is_empty(&self) -> bool { self.images.is_empty() }
    pub fn contains(&self, id: u32) -> bool { self.images.contains_key(&id) }
    pub fn get(&self, id: u32) -> Option<&CachedImage> { self.images.get(&id) }

    /// Insert a decoded image, evicting least-recently-used entries until it
    /// fits within `max_total_bytes`.
    pub fn insert(&mut self, id: u32, decoded: DecodedImage) -> Result<(), KittyError> {
        let size = decoded.rgba.len();
        if size > self.max_single_bytes {
            return Err(KittyError::OversizeImage);
        }

        self.remove(id);
        while self.total_bytes + size > self.max_total_bytes && !self.lru.is_empty() {
            let victim = self.lru.remove(0);
            self.evict(victim);
        }

        self.total_bytes += size;
        self.images.insert(id, CachedImage { width: decoded.width, height: decoded.height, rgba: decoded.rgba });
        self.lru.push(id);
        Ok(())
    }

    fn remove(&mut self, id: u32) {
        if let Some(img) = self.images.remove(&id) {
            self.total_bytes -= img.byte_len();
            self.lru.retain(|&x| x != id);
        }
    }

    fn evict(&mut self, id: u32) {
        if let Some(img) = self.images.remove(&id) {
            self.total_bytes -= img.byte_len();
        }
        self.placements.retain(|p| p.image_id != id);
    }

    /// Mark `id` as just-used, moving it to the MRU end.
    pub fn touch(&mut self, id: u32) {
        if let Some(pos) = self.lru.iter().position(|&x| x == id) {
            let id = self.lru.remove(pos);
            self.lru.push(id);
        }
    }

    pub fn add_placement(&mut self, placement: Placement) {
        self.placements.retain(|p| !(p.image_id == placement.image_id && p.placement_id == placement.placement_id));
        if self.placements.len() >= self.max_placements {
            self.placements.remove(0);
        }
        self.placements.push(placement);
    }

    pub fn placements(&self) -> &[Placement] { &self.placements }

    pub fn delete(&mut self, target: DeleteTarget) {
        match target {
            DeleteTarget::All => {
                self.placements.clear();
                self.images.clear();
                self.lru.clear();
                self.total_bytes = 0;
            }
            DeleteTarget::Image { image_id, placement_id: Some(pid) } => {
                self.placements.retain(|p| !(p.image_id == image_id && p.placement_id == pid));
            }
            DeleteTarget::Image { image_id, placement_id: None } => {
                self.placements.retain(|p| p.image_id != image_id);
                self.evict(image_id);
                self.lru.retain(|&x| x != image_id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn img(bytes: usize) -> DecodedImage {
        DecodedImage { width: 1, height: 1, rgba: vec![0u8; bytes] }
    }

    #[test]
    fn oversize_single_image_is_rejected() {
        let mut cache = KittyImageCache::new(1000, 100, 10);
        assert!(matches!(cache.insert(1, img(200)), Err(KittyError::OversizeImage)));
    }

    #[test]
    fn lru_evicts_oldest_first_to_make_room() {
        let mut cache = KittyImageCache::new(250, 200, 10);
        cache.insert(1, img(100)).unwrap();
        cache.insert(2, img(100)).unwrap();
        cache.insert(3, img(100)).unwrap();
        assert!(!cache.contains(1));
        assert!(cache.contains(2));
        assert!(cache.contains(3));
    }

    #[test]
    fn touch_protects_from_next_eviction() {
        let mut cache = KittyImageCache::new(250, 200, 10);
        cache.insert(1, img(100)).unwrap();
        cache.insert(2, img(100)).unwrap();
        cache.touch(1);
        cache.insert(3, img(100)).unwrap();
        assert!(cache.contains(1));
        assert!(!cache.contains(2));
    }

    #[test]
    fn delete_all_clears_everything() {
        let mut cache = KittyImageCache::new(1000, 1000, 10);
        cache.insert(1, img(10)).unwrap();
        cache.add_placement(Placement { image_id: 1, placement_id: 0, col: 0, row: 0 });
        cache.delete(DeleteTarget::All);
        assert!(cache.is_empty());
        assert!(cache.placements().is_empty());
    }
}
