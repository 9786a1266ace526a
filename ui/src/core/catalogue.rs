//! Product catalogue: the data behind the product detail slides.
//!
//! Copy lives in the localization files under `product-<id>-*`; this table
//! only carries ids, classification and the non-localized links.

use super::links::PRODUCT_PAGE_BASE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    MastitisManagement,
    NutrientSupplements,
    DairyEquipment,
    VeterinaryTests,
    BreedingSolutions,
}

impl Category {
    pub fn message_id(self) -> &'static str {
        match self {
            Category::MastitisManagement => "category-mastitis-management",
            Category::NutrientSupplements => "category-nutrient-supplements",
            Category::DairyEquipment => "category-dairy-equipment",
            Category::VeterinaryTests => "category-veterinary-tests",
            Category::BreedingSolutions => "category-breeding-solutions",
        }
    }
}

/// Badge shown next to the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Prevention,
    Treatment,
    Detection,
    Equipment,
}

impl Tag {
    pub fn message_id(self) -> &'static str {
        match self {
            Tag::Prevention => "tag-prevention",
            Tag::Treatment => "tag-treatment",
            Tag::Detection => "tag-detection",
            Tag::Equipment => "category-dairy-equipment",
        }
    }

    /// BEM modifier for the badge colour.
    pub fn modifier(self) -> &'static str {
        match self {
            Tag::Prevention => "prevention",
            Tag::Treatment => "treatment",
            Tag::Detection => "detection",
            Tag::Equipment => "equipment",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: &'static str,
    pub category: Category,
    pub tag: Tag,
    pub has_subtitle: bool,
    pub feature_count: usize,
    pub image_url: &'static str,
    /// Slug under the product page base.
    pub page_slug: &'static str,
}

impl Product {
    pub fn title_id(&self) -> String {
        format!("product-{}-title", self.id)
    }

    pub fn subtitle_id(&self) -> Option<String> {
        self.has_subtitle
            .then(|| format!("product-{}-subtitle", self.id))
    }

    pub fn description_id(&self) -> String {
        format!("product-{}-description", self.id)
    }

    /// Feature ids, numbered from 1.
    pub fn feature_ids(&self) -> Vec<String> {
        (1..=self.feature_count)
            .map(|n| format!("product-{}-feature-{n}", self.id))
            .collect()
    }

    pub fn buy_url(&self) -> String {
        format!("{PRODUCT_PAGE_BASE}{}", self.page_slug)
    }

    /// Every localization id this product's slide reads.
    pub fn message_ids(&self) -> Vec<String> {
        let mut ids = vec![self.title_id(), self.description_id()];
        ids.extend(self.subtitle_id());
        ids.extend(self.feature_ids());
        ids.push(self.category.message_id().to_string());
        ids.push(self.tag.message_id().to_string());
        ids
    }
}

const fn product(
    id: &'static str,
    category: Category,
    tag: Tag,
    has_subtitle: bool,
    feature_count: usize,
    image_url: &'static str,
    page_slug: &'static str,
) -> Product {
    Product {
        id,
        category,
        tag,
        has_subtitle,
        feature_count,
        image_url,
        page_slug,
    }
}

/// Catalogue in slide order.
pub static PRODUCTS: [Product; 9] = [
    product(
        "cmt",
        Category::MastitisManagement,
        Tag::Prevention,
        false,
        5,
        "https://static.wixstatic.com/media/a001c4_68eab0b256ab424d9909195736e1157e~mv2.png",
        "california-mastitis-test-kit-with-paddle",
    ),
    product(
        "nutrakine",
        Category::NutrientSupplements,
        Tag::Treatment,
        false,
        5,
        "https://static.wixstatic.com/media/bfd149_8521084c3ecf4359b72495d63a1868da~mv2.jpg",
        "nutrakine-fertility-booster-500grams",
    ),
    product(
        "engine",
        Category::DairyEquipment,
        Tag::Equipment,
        true,
        5,
        "https://static.wixstatic.com/media/a001c4_b36972100432454bb57e2d25e9d0ba8e~mv2.png",
        "6-5-hp-petrol-engine",
    ),
    product(
        "salmonella",
        Category::VeterinaryTests,
        Tag::Detection,
        false,
        5,
        "https://static.wixstatic.com/media/bfd149_3825ee6c2bfe4e4dbd8a82e0eee43239~mv2.jpg",
        "salmonella-antibody-rapid-test-kit",
    ),
    product(
        "pregkine",
        Category::BreedingSolutions,
        Tag::Detection,
        false,
        5,
        "https://static.wixstatic.com/media/a001c4_186d39723fae4cecbcb4ee3f31fe574b~mv2.avif",
        "pregkine-bovine-pregnancy-rapid-test-kit-pack-of-10",
    ),
    product(
        "iogiene",
        Category::MastitisManagement,
        Tag::Prevention,
        false,
        5,
        "https://static.wixstatic.com/media/a001c4_6af24cc7d48343dab803578714ae6000~mv2.png",
        "iogiene",
    ),
    product(
        "moofoam",
        Category::MastitisManagement,
        Tag::Prevention,
        true,
        5,
        "https://static.wixstatic.com/media/a001c4_20b56085396745b68a79b57c3fa89174~mv2.png",
        "moo-foam",
    ),
    product(
        "quadmastest",
        Category::MastitisManagement,
        Tag::Detection,
        true,
        8,
        "https://static.wixstatic.com/media/a001c4_c8129ca228a2498c8d81b998daecd31b~mv2.png",
        "quadmastest",
    ),
    product(
        "mastoveda",
        Category::MastitisManagement,
        Tag::Treatment,
        true,
        7,
        "https://static.wixstatic.com/media/a001c4_4389b7b639c2425cbd7470ac1e7c4c16~mv2.png",
        "mastoveda",
    ),
];
