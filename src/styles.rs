//! Injected Stylesheets
//!
//! Each block is appended to `<head>` once, when the feature that needs it
//! is mounted.

/// Notification keyframes, product hover and the mobile header layout.
pub const ANIMATIONS: &str = r#"
@keyframes slideIn {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}

@keyframes slideOut {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(100%); opacity: 0; }
}

.notification {
    position: fixed;
    top: 20px;
    right: 20px;
    color: white;
    padding: 12px 24px;
    border-radius: 4px;
    box-shadow: 0 4px 6px rgba(0,0,0,0.1);
    z-index: 1000;
}

.product {
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}

.product:hover {
    transform: translateY(-5px);
    box-shadow: 0 8px 25px rgba(0,0,0,0.15);
}

.product-btn {
    transition: background-color 0.3s ease, transform 0.2s ease;
}

.product-btn:hover {
    transform: scale(1.05);
}

.mobile-menu-btn {
    display: none;
    background: none;
    border: none;
    font-size: 24px;
    cursor: pointer;
    color: #333;
}

.cart-line {
    display: flex;
    align-items: center;
    gap: 12px;
    padding: 8px 0;
    border-bottom: 1px solid #eee;
}

.cart-line img {
    width: 48px;
    height: 48px;
    object-fit: cover;
}

.cart-line .cart-line-title {
    flex: 1;
}

@media (max-width: 768px) {
    .mobile-menu-btn {
        display: block !important;
    }

    .header-actions,
    .search-container {
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        background: white;
        padding: 20px;
        box-shadow: 0 4px 6px rgba(0,0,0,0.1);
        flex-direction: column;
        gap: 10px;
    }
}
"#;

pub const BANNER: &str = r#"
.banner-slider {
    position: relative;
    height: 400px;
    margin-bottom: 50px;
    overflow: hidden;
    border-radius: 10px;
    box-shadow: 0 4px 15px rgba(0,0,0,0.1);
}

.banner-container {
    width: 100%;
    height: 100%;
    position: relative;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
}

.banner-slide {
    width: 100%;
    height: 100%;
    display: none;
    align-items: center;
    justify-content: center;
    text-align: center;
    color: white;
}

.banner-slide.active {
    display: flex;
}

.banner-content h1 {
    font-size: 3rem;
    margin-bottom: 1rem;
    animation: fadeInUp 1s ease;
}

.banner-content p {
    font-size: 1.2rem;
    margin-bottom: 2rem;
    animation: fadeInUp 1s ease 0.2s both;
}

.banner-cta {
    background: #ff6b6b;
    color: white;
    border: none;
    padding: 12px 30px;
    font-size: 1.1rem;
    border-radius: 25px;
    cursor: pointer;
    transition: all 0.3s ease;
    animation: fadeInUp 1s ease 0.4s both;
}

.banner-cta:hover {
    background: #ff5252;
    transform: translateY(-2px);
    box-shadow: 0 5px 15px rgba(255,107,107,0.4);
}

.banner-dots {
    position: absolute;
    bottom: 20px;
    left: 50%;
    transform: translateX(-50%);
    display: flex;
    gap: 10px;
}

.dot {
    width: 12px;
    height: 12px;
    border-radius: 50%;
    background: rgba(255,255,255,0.5);
    cursor: pointer;
    transition: background 0.3s ease;
}

.dot.active {
    background: white;
}

@keyframes fadeInUp {
    from { opacity: 0; transform: translateY(30px); }
    to { opacity: 1; transform: translateY(0); }
}

@media (max-width: 768px) {
    .banner-slider {
        height: 300px;
    }

    .banner-content h1 {
        font-size: 2rem;
    }

    .banner-content p {
        font-size: 1rem;
    }
}
"#;

pub const STATS: &str = r#"
.stats-section {
    padding: 80px 0;
    background: #f8f9fa;
    text-align: center;
}

.stats-section h2 {
    font-size: 2.5rem;
    margin-bottom: 50px;
    color: #333;
}

.stats-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 30px;
    max-width: 800px;
    margin: 0 auto;
}

.stat-item {
    background: white;
    padding: 30px 20px;
    border-radius: 10px;
    box-shadow: 0 5px 15px rgba(0,0,0,0.1);
    transition: transform 0.3s ease;
}

.stat-item:hover {
    transform: translateY(-5px);
}

.stat-number {
    font-size: 3rem;
    font-weight: bold;
    color: #667eea;
    margin-bottom: 10px;
}

.stat-label {
    font-size: 1.1rem;
    color: #666;
}
"#;

/// Filter panel plus the list layout it can switch `.products` into.
pub const FILTERS: &str = r#"
.filter-panel {
    background: #f8f9fa;
    padding: 20px 0;
    margin-bottom: 30px;
    border-radius: 8px;
}

.filter-controls {
    display: flex;
    flex-wrap: wrap;
    gap: 20px;
    align-items: center;
    justify-content: space-between;
}

.filter-group {
    display: flex;
    align-items: center;
    gap: 10px;
}

.filter-group label {
    font-weight: 600;
    color: #333;
}

.filter-group select,
.price-range input {
    padding: 8px 12px;
    border: 1px solid #ddd;
    border-radius: 4px;
}

.price-range {
    display: flex;
    align-items: center;
    gap: 8px;
}

.price-range input {
    width: 100px;
}

.filter-group button {
    padding: 8px 16px;
    border: none;
    border-radius: 4px;
    background: #667eea;
    color: white;
    cursor: pointer;
    transition: background 0.3s ease;
}

.filter-group button:hover {
    background: #5a67d8;
}

.results-count {
    color: #666;
    font-size: 0.95rem;
}

.products.list-view {
    display: grid;
    grid-template-columns: 1fr;
    gap: 15px;
}

.products.list-view .product {
    overflow: hidden;
}

.products.list-view .product img {
    float: left;
    width: 150px;
    height: auto;
    margin-right: 20px;
}

@media (max-width: 768px) {
    .filter-controls {
        flex-direction: column;
        align-items: stretch;
    }

    .filter-group {
        flex-wrap: wrap;
    }
}
"#;
