// crates/foodgrid-advisor/src/advisory/fallback/templates.rs
// Hand-authored advisory prose, one generator per topic
//
// All prices, yields and percentages below are illustrative sample figures.
// They are not computed from market or weather data.

use foodgrid_types::{QueryContext, context_keys};

/// Context value or a generic placeholder phrase (never empty)
fn hint<'a>(context: &'a QueryContext, key: &str, placeholder: &'a str) -> &'a str {
    context.get(key).unwrap_or(placeholder)
}

pub fn crop_recommendation(_query: &str, context: &QueryContext) -> String {
    let soil_type = hint(context, context_keys::SOIL_TYPE, "your soil type");
    let season = hint(context, context_keys::SEASON, "This Season");
    let location = context
        .get(context_keys::LOCATION)
        .map(|l| format!(" in {}", l))
        .unwrap_or_default();

    format!(
        r#"Based on {soil_type}{location} and current market conditions, I recommend:

**Top 3 Crops for {season}:**

1. **Ragi (Finger Millet)** - 95% Match
   - Expected Yield: 2.5 tons/acre
   - Water Requirement: Low (drought resistant)
   - Market Demand: High (₹35-40/kg)
   - Why: Tolerates light, well-drained soils, high nutritional value, strong local demand

2. **Groundnut** - 88% Match
   - Expected Yield: 1.8 tons/acre
   - Water Requirement: Medium
   - Market Demand: Stable (₹50-55/kg)
   - Why: Good soil compatibility, reliable market, oil extraction potential

3. **Green Gram (Moong Dal)** - 82% Match
   - Expected Yield: 0.8 tons/acre
   - Water Requirement: Low
   - Market Demand: High (₹80-90/kg)
   - Why: Nitrogen fixing, improves soil health, excellent rotation crop

**Additional Insights:**
- Intercropping Ragi with pulses can increase overall yield by 15-20%
- Current weather patterns favor crops with low water requirements
- Local micro-hubs have confirmed demand for all three crops

Would you like detailed cultivation practices for any of these crops?"#
    )
}

pub fn market_insight(_query: &str, context: &QueryContext) -> String {
    let location = hint(context, context_keys::LOCATION, "your region");

    format!(
        r#"**Current Market Analysis for {location}:**

**Price Trends (Sample Data, Last 30 Days):**
- Ragi: ₹35-40/kg (↑ 8% increase)
- Vegetables: ₹15-25/kg (stable)
- Pulses: ₹80-95/kg (↑ 12% increase)

**Demand Forecast:**
- High demand for millets due to health awareness campaigns
- Vegetable demand steady with slight seasonal variations
- Pulse prices expected to remain strong through the next quarter

**Best Selling Periods:**
- Ragi: November-January (post-harvest premium)
- Vegetables: Year-round with peak demand during festivals
- Pulses: September-December (wedding season demand)

**Storage Recommendations:**
- Store in cool, dry conditions (8-12°C optimal)
- Use moisture-proof containers
- Regular quality checks every 2 weeks
- Connect with micro-hubs for cold storage facilities

**Action Items:**
1. Lock in prices for 60% of expected harvest now
2. Store 40% for potential price increases
3. Grade produce carefully - Grade A fetches 20-30% premium

Need help connecting with buyers or micro-hubs?"#
    )
}

pub fn weather_advisory(_query: &str, context: &QueryContext) -> String {
    let location = hint(context, context_keys::LOCATION, "your area");

    format!(
        r#"**7-Day Weather Advisory for {location}:**

**Typical Conditions (Sample Outlook):**
- Temperature: 26-30°C (favorable for most crops)
- Humidity: 65-70% (moderate)
- Rainfall: Light to moderate showers mid-week

**Farming Activities - DO:**
✓ Complete transplanting operations before the rain
✓ Apply organic mulch to retain soil moisture
✓ Inspect drainage systems and clear blockages
✓ Harvest mature crops before heavy rain expected
✓ Apply foliar nutrients in early morning hours

**Farming Activities - AVOID:**
✗ Pesticide application during rainfall (wait 48 hours after rain)
✗ Heavy irrigation - natural rainfall will suffice
✗ Soil preparation in waterlogged areas
✗ Harvesting during wet conditions (quality degradation)

**Pest & Disease Alert:**
- Increased humidity may trigger fungal diseases
- Monitor for leaf spot, blight symptoms
- Ensure proper spacing for air circulation

**Week Ahead Strategy:**
- Days 1-2: Complete urgent field operations
- Days 3-4: Rainfall period - indoor planning and maintenance
- Days 5-7: Post-rain field inspection and corrective actions

Monitor local weather alerts daily and plan operations around rainfall."#
    )
}

pub fn pest_control(_query: &str, context: &QueryContext) -> String {
    let crop = hint(context, context_keys::CROP, "your crops");

    format!(
        r#"**Integrated Pest Management Guide for {crop}:**

**Common Pests This Season:**

1. **Aphids** (Small green/black insects on leaves)
   - Organic Control: Neem oil spray (5ml/liter), introduce ladybugs
   - Chemical: Imidacloprid (if severe infestation)
   - Prevention: Maintain field hygiene, remove infected plants

2. **Leaf Miners** (White trails on leaves)
   - Organic Control: Yellow sticky traps, neem cake application
   - Chemical: Spinosad-based sprays
   - Prevention: Crop rotation, timely weeding

3. **Stem Borers** (Wilting plants, holes in stems)
   - Organic Control: Pheromone traps, Trichogramma wasps
   - Chemical: Chlorantraniliprole (last resort)
   - Prevention: Remove crop residues, deep summer plowing

**Disease Management:**
- Fungal: leaf spots, powdery coating. Use copper-based fungicides and improve drainage
- Bacterial: water-soaked lesions, yellowing. Remove infected plants, use disease-free seed

**Best Practices:**
1. Scout fields weekly for early detection
2. Use organic methods first (safer, cost-effective)
3. Apply chemicals only when threshold reached
4. Follow recommended dosages and safety periods
5. Maintain spray records for traceability

Share the symptoms you see for a more specific diagnosis."#
    )
}

pub fn soil_management(_query: &str, context: &QueryContext) -> String {
    let soil_type = hint(
        context,
        context_keys::SOIL_TYPE,
        "not specified (share your soil type for tailored advice)",
    );

    format!(
        r#"**Soil Health Management Guide:**

**Soil Type: {soil_type}**

**Soil Testing Recommendations:**
- Test soil every 6 months for optimal results
- Key parameters: pH, NPK, organic carbon, micronutrients
- Local testing available at district agriculture offices

**Organic Amendments:**
- Compost: 5-10 tons/acre annually
- Vermicompost: 2-3 tons/acre (rich in microbes)
- Green manure: Grow and incorporate legumes
- Farm Yard Manure: 8-10 tons/acre

**Chemical Fertilizers (if needed):**
- NPK ratio based on soil test results
- Split application for better efficiency
- Avoid over-application (damages soil biology)

**Soil Improvement Strategies:**
1. Increase organic matter: add crop residues, mulch, grow cover crops
2. Improve water retention: contour bunds, conservation tillage
3. Enhance soil biology: bio-fertilizers (Rhizobium, Azospirillum), crop diversity
4. Prevent erosion: contour farming, vegetative cover, check dams

**pH Management:**
- Acidic soils (pH < 6): Apply lime (500-1000 kg/acre)
- Alkaline soils (pH > 8): Apply gypsum, organic matter

**Micronutrient Deficiency Signs:**
- Yellowing leaves: Iron or nitrogen deficiency
- Purple tint: Phosphorus deficiency
- Brown leaf edges: Potassium deficiency

Connect with soil experts at your micro-hub for a personalized soil health plan."#
    )
}

pub fn nutrition_plan(_query: &str, context: &QueryContext) -> String {
    let household = context
        .get(context_keys::HOUSEHOLD_SIZE)
        .map(|n| format!("a household of {}", n))
        .unwrap_or_else(|| "your household".to_string());

    format!(
        r#"**Personalized Nutrition Plan for {household}:**

**Weekly Meal Planning Strategy:**

**Monday - Iron & Calcium Day:**
- Breakfast: Ragi porridge with jaggery
- Lunch: Spinach dal with rice
- Dinner: Ragi roti with vegetable curry
- Local Cost: ₹180

**Tuesday - Protein & Fiber Day:**
- Breakfast: Moong dal dosa
- Lunch: Rajma curry with rice
- Dinner: Mixed vegetable with chapati
- Local Cost: ₹165

**Wednesday - Vitamin Rich Day:**
- Breakfast: Jowar roti with vegetables
- Lunch: Mixed vegetable curry
- Dinner: Tomato rice with raita
- Local Cost: ₹145

**Seasonal Advantages:**
✓ Millets are cheaper in the current season
✓ Fresh vegetables available from local hubs
✓ Reduced transportation costs mean better nutrition value

**Shopping List (Weekly, Sample Prices):**
- Ragi: 2 kg (₹80)
- Rice: 3 kg (₹150)
- Dal (mixed): 1.5 kg (₹135)
- Vegetables: 5 kg (₹125)
- Spices & others: ₹110
**Total: ₹600/week**

Order through FOOD-GRID for farmer-direct pricing."#
    )
}

pub fn storage_advice(_query: &str, _context: &QueryContext) -> String {
    r#"**Post-Harvest Storage Guide:**

**Immediate Post-Harvest:**
1. Clean and dry produce thoroughly
2. Remove damaged/diseased items
3. Grade by size and quality
4. Cool to optimal temperature within 2 hours

**Storage Conditions by Crop Type:**
- Grains (Ragi, Rice, Wheat): 20-25°C, < 12% moisture, 6-12 months, airtight containers
- Pulses (Dal, Beans): cool and dry, < 10% moisture, 8-12 months, sealed bags
- Vegetables (Tomatoes, Onions): 4-8°C, 85-90% humidity, 2-4 weeks, ventilated crates
- Fruits: 2-5°C, 90-95% humidity, 1-3 weeks, cold storage

**Storage Loss Prevention:**
1. Moisture damage: use moisture absorbers, ventilate, turn stored grain
2. Pest infestation: neem leaves in storage, weekly inspection
3. Quality degradation: avoid mixing old and new stock, use FIFO

**Storage Cost Analysis (Sample Figures):**
- Home storage: ₹0.50/kg/month (10-15% loss)
- Micro-hub storage: ₹2/kg/month (2-3% loss)
- Net benefit: ₹1.50/kg from reduced losses

Connect with your nearest micro-hub for professional storage solutions."#
        .to_string()
}

pub fn government_scheme(_query: &str, context: &QueryContext) -> String {
    let location = hint(context, context_keys::LOCATION, "your state");

    format!(
        r#"**Government Schemes & Financial Support:**

**1. PM-KISAN (Direct Income Support):**
- Benefit: ₹6,000/year in 3 installments
- Eligibility: All landholding farmers
- Apply: Through local agriculture office

**2. Kisan Credit Card (KCC):**
- Benefit: Low-interest crop loans (4% interest)
- Limit: Based on land holding and crop
- Apply: Through cooperative banks

**3. Pradhan Mantri Fasal Bima Yojana (Crop Insurance):**
- Premium: 2% for Kharif, 1.5% for Rabi
- Coverage: Natural calamities, pest attacks
- Enrollment: During sowing season

**4. Soil Health Card Scheme:**
- Benefit: Free soil testing every 2 years with nutrient recommendations

**5. National Horticulture Mission:**
- Subsidy: 40-50% on drip irrigation, greenhouses

**State Programs ({location}):**
- Check your state agriculture department for input subsidies, farm equipment support and micro-irrigation programs

**How to Apply:**
1. Visit nearest Krishi Bhavan/Agriculture Office
2. Carry land documents, Aadhaar, bank details
3. Fill application forms (online/offline)
4. Track application status online

Need help with applications? Ask for a step-by-step guide for any scheme."#
    )
}

pub fn general_guidance(query: &str, _context: &QueryContext) -> String {
    format!(
        r#"I understand you're asking about "{}". Based on current agricultural best practices, I recommend:

1. **Immediate Action**: Assess your current crop status and soil conditions
2. **Planning**: Consider seasonal factors and market demand
3. **Resources**: Connect with your local micro-hub for support and supplies

Would you like specific guidance on crop selection, market prices, or farming techniques?"#,
        query.trim()
    )
}
